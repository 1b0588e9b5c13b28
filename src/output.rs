// Non-interactive rendering of the expense list for the `list` command

use crate::app::App;
use crate::components::list::ListContent;
use crate::config::OutputFormat;
use anyhow::Result;

pub fn render(app: &App, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(app)),
        OutputFormat::Json => render_json(app),
    }
}

fn render_plain(app: &App) -> String {
    let view = app.list_view();
    let mut out = format!("Filter by year: {}\n", view.selected_year);

    match &view.content {
        ListContent::Empty(message) => {
            out.push_str(message);
            out.push('\n');
        }
        ListContent::Items(items) => {
            for item in items {
                out.push_str(&format!(
                    "{:<9} {:>2} {}  {:<30} {:>10}\n",
                    item.date.month, item.date.day, item.date.year, item.title, item.amount
                ));
            }
        }
    }

    out
}

fn render_json(app: &App) -> Result<String> {
    let payload = serde_json::json!({
        "selected_year": app.list.selected_year(),
        "expenses": app.visible(),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::seed_expenses;

    #[test]
    fn test_plain_lists_visible_items() {
        let app = App::with_expenses(seed_expenses(), 2021).unwrap();
        let out = render(&app, OutputFormat::Plain).unwrap();

        assert!(out.starts_with("Filter by year: 2021"));
        assert!(out.contains("New TV"));
        assert!(out.contains("$799.49"));
        assert!(!out.contains("Toilet Paper"));
    }

    #[test]
    fn test_plain_empty_state() {
        let app = App::with_expenses(seed_expenses(), 2023).unwrap();
        let out = render(&app, OutputFormat::Plain).unwrap();

        assert!(out.contains("Found no expenses."));
    }

    #[test]
    fn test_json_output() {
        let app = App::with_expenses(seed_expenses(), 2020).unwrap();
        let out = render(&app, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["selected_year"], 2020);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 1);
        assert_eq!(value["expenses"][0]["title"], "Toilet Paper");
    }
}
