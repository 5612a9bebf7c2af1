use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crate::domain::{FetchRequest, View};
use crossterm::event::KeyCode;

mod chart;
mod weather;

pub fn dispatch_input(app: &mut App, key: KeyCode) -> Option<FetchRequest> {
    if handle_help_toggle(app, key) {
        return None;
    }

    // A focused search box swallows every key, digits and 'q' included.
    if app.search_focused {
        weather::handle_search_input(app, key);
        return None;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
            None
        }
        KeyCode::Char(c @ '1'..='3') => {
            View::from_shortcut(c).and_then(|view| app.set_active_view(view))
        }
        KeyCode::Tab => app.set_active_view(neighbour_view(app.view, true)),
        KeyCode::BackTab => app.set_active_view(neighbour_view(app.view, false)),
        KeyCode::Char('x') => {
            app.toasts.dismiss_latest();
            None
        }
        _ => {
            match app.view {
                View::Weather => weather::handle_weather_input(app, key),
                View::Chart => chart::handle_chart_input(app, key),
                View::Empty | View::PowerBi => {}
            }
            None
        }
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::Enter) {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn neighbour_view(current: View, forward: bool) -> View {
    let views = View::navigable();
    let index = views.iter().position(|view| *view == current).map_or_else(
        || if forward { 0 } else { views.len() - 1 },
        |index| {
            if forward {
                wrap_increment(index, views.len())
            } else {
                wrap_decrement(index, views.len())
            }
        },
    );
    views[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::row;
    use crate::config::DashboardConfig;
    use crate::domain::ChartKind;

    fn app() -> App {
        App::new(&DashboardConfig::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) -> Vec<FetchRequest> {
        keys.iter()
            .filter_map(|key| dispatch_input(app, *key))
            .collect()
    }

    #[test]
    fn clicking_the_active_button_again_issues_no_fetch() {
        let mut app = app();

        let requests = press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('2')],
        );

        assert_eq!(requests, vec![FetchRequest::Weather, FetchRequest::Stats]);
    }

    #[test]
    fn report_view_fetches_nothing() {
        let mut app = app();
        assert!(press(&mut app, &[KeyCode::Char('3')]).is_empty());
        assert_eq!(app.view, View::PowerBi);
    }

    #[test]
    fn tab_walks_the_navigation_buttons() {
        let mut app = app();

        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.view, View::Weather);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.view, View::PowerBi);
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.view, View::Chart);
    }

    #[test]
    fn search_box_captures_shortcut_keys() {
        let mut app = app();
        app.weather_rows = vec![row("Pune", "High Risk"), row("Goa", "Low Risk")];
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('/')]);
        assert!(app.search_focused);

        let requests = press(&mut app, &[KeyCode::Char('g'), KeyCode::Char('2'), KeyCode::Char('q')]);
        assert!(requests.is_empty());
        assert!(app.running);
        assert_eq!(app.view, View::Weather);
        assert_eq!(app.search_term, "g2q");

        press(&mut app, &[KeyCode::Backspace, KeyCode::Backspace, KeyCode::Enter]);
        assert!(!app.search_focused);
        assert_eq!(app.search_term, "g");
        assert_eq!(app.filtered_rows().len(), 1);
    }

    #[test]
    fn chart_keys_only_change_the_rendering() {
        let mut app = app();
        let requests = press(
            &mut app,
            &[KeyCode::Char('2'), KeyCode::Char('b'), KeyCode::Char('l'), KeyCode::Left],
        );

        assert_eq!(requests, vec![FetchRequest::Stats]);
        assert_eq!(app.chart_kind, ChartKind::Bar);

        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.chart_kind, ChartKind::Pie);
    }

    #[test]
    fn help_overlay_blocks_other_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::F(1), KeyCode::Char('1'), KeyCode::Char('q')]);

        assert!(app.show_help);
        assert!(app.running);
        assert_eq!(app.view, View::Empty);

        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.show_help);
    }

    #[test]
    fn q_quits_outside_the_search_box() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }
}
