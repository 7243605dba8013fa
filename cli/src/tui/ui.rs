//! TUI rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use prepplate_core::catalog::CategoryKind;
use prepplate_core::plan::Recipe;

use super::app::{App, MealSlot, PickerRow, ResultsTab, Screen, picker_rows};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the current screen.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // main content
            Constraint::Length(1), // message line
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    match app.screen {
        Screen::Selection => render_selection(f, app, chunks[0]),
        Screen::Generating => render_generating(f, app, chunks[0]),
        Screen::Results => match app.results_tab {
            ResultsTab::Weekly => render_weekly(f, app, chunks[0]),
            ResultsTab::WeekendPrep => render_weekend_prep(f, app, chunks[0]),
        },
        Screen::RecipeDetail => render_recipe_detail(f, app, chunks[0]),
    }

    render_message_line(f, app, chunks[1]);
    render_key_hints(f, app, chunks[2]);
}

fn panel_title(kind: CategoryKind, app: &App) -> String {
    let count = app.selection.selected(kind).len();
    let max = kind.max();
    match kind {
        CategoryKind::Protein => format!(" 1. Main Proteins ({count}/{max}) "),
        CategoryKind::Veggie => format!(" 2. Veggies, optional ({count}/{max}) "),
        CategoryKind::Carb => format!(" 3. Carbs, optional ({count}/{max}) "),
    }
}

fn render_selection(f: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, kind) in CategoryKind::ALL.iter().enumerate() {
        let focused = i == app.focused;
        let items: Vec<ListItem> = picker_rows(*kind)
            .iter()
            .map(|row| match row {
                PickerRow::Group(label) => ListItem::new(Line::from(Span::styled(
                    format!("— {label} —"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))),
                PickerRow::Item(label) => {
                    let selected = app.selection.is_selected(*kind, label);
                    let marker = if selected { "[x]" } else { "[ ]" };
                    let style = if selected {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(format!("{marker} {label}"), style)))
                }
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(panel_title(*kind, app)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut state = ListState::default();
        if focused {
            state.select(Some(app.cursors[i]));
        }
        f.render_stateful_widget(list, panels[i], &mut state);
    }
}

fn render_generating(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Percentage(40),
        ])
        .split(area);

    let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
    let text = vec![
        Line::from(Span::styled(
            format!("{spinner} The chef is thinking..."),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Designing your global menu and organizing your weekend prep."),
    ];
    let paragraph = Paragraph::new(text).centered();
    f.render_widget(paragraph, chunks[1]);
}

fn meal_summary(slot: MealSlot, recipe: &Recipe) -> String {
    let freezer = if recipe.is_freezable {
        " · freezes well"
    } else {
        ""
    };
    format!(
        "  {}: {} — {} · {} min{}",
        slot.label(),
        recipe.name,
        recipe.origin,
        recipe.time_minutes,
        freezer
    )
}

fn render_weekly(f: &mut Frame, app: &App, area: Rect) {
    let Some(plan) = &app.plan else {
        return;
    };

    let mut items: Vec<ListItem> = Vec::with_capacity(plan.meals.len() * 3);
    for day in &plan.meals {
        items.push(ListItem::new(Line::from(Span::styled(
            day.day.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))));
        items.push(ListItem::new(meal_summary(MealSlot::Lunch, &day.lunch)));
        items.push(ListItem::new(meal_summary(MealSlot::Dinner, &day.dinner)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Weekly Plan "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    // Day rows interleave with meal rows: 3 rows per day, header first.
    let selected = app.meal_cursor / 2 * 3 + 1 + app.meal_cursor % 2;
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_weekend_prep(f: &mut Frame, app: &App, area: Rect) {
    let Some(plan) = &app.plan else {
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Complete these tasks on the weekend to keep weekday cooking short.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (i, group) in plan.weekend_prep.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, group.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for task in &group.tasks {
            lines.push(Line::from(format!("  [ ] {task}")));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Weekend Prep "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.prep_scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_recipe_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some((day, slot, recipe)) = app.selected_recipe() else {
        return;
    };

    let section = |title: &str| {
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            recipe.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} · {} min active · {}",
            recipe.origin,
            recipe.time_minutes,
            if recipe.is_freezable {
                "freezer-friendly"
            } else {
                "best fresh"
            }
        )),
        Line::from(Span::styled(
            recipe.search_url.clone(),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
    ];

    lines.push(section("Ingredients"));
    for item in &recipe.ingredients {
        lines.push(Line::from(format!("  {} — {}", item.name, item.amount)));
    }
    lines.push(Line::from(""));

    lines.push(section("Spices"));
    for item in &recipe.spices {
        lines.push(Line::from(format!("  {} — {}", item.name, item.amount)));
    }
    lines.push(Line::from(""));

    lines.push(section("Mise en Place"));
    for step in &recipe.mise_en_place {
        lines.push(Line::from(format!("  {}: {}", step.title, step.instruction)));
    }
    lines.push(Line::from(""));

    lines.push(section("Cooking Steps"));
    for (i, step) in recipe.cooking_steps.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {}", i + 1, step)));
    }
    lines.push(Line::from(""));

    lines.push(section("Pro Tips"));
    for tip in &recipe.pro_tips {
        lines.push(Line::from(format!("  * {tip}")));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {day} · {} ", slot.label())),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_message_line(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(line, area);
    }
}

fn render_key_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Selection => {
            "tab: category · j/k: move · space: toggle · a: auto-fill · g: generate · q: quit"
        }
        Screen::Generating => "q: quit",
        Screen::Results => {
            "tab: weekly/weekend · j/k: move · enter: recipe · s: start over · q: quit"
        }
        Screen::RecipeDetail => "j/k: scroll · esc: back",
    };
    let line = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(line, area);
}
