//! Text rendering of the desktop chrome, dock and open window.

use colored::Colorize;
use learnos_application::WindowView;
use learnos_core::app::Icon;
use learnos_core::dock::{DockItem, DockView};
use learnos_core::sandbox::forces::{Forces, MAX_WEIGHT};
use learnos_core::sandbox::number_play::NumberPlay;
use learnos_core::sandbox::pattern_garden::PatternGarden;
use learnos_core::sandbox::{Balance, SandboxApp, forces, number_play, pattern_garden};

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Calculator => "[+]",
        Icon::Grid => "[#]",
        Icon::Orbit => "(o)",
        Icon::Application => "[ ]",
    }
}

pub fn header() -> String {
    format!(
        "{}    {}",
        "≡ LearnOS".bright_white().bold(),
        "⌕ Follow your curiosity".bright_black()
    )
}

pub fn help() -> String {
    [
        "/dock                 show the dock",
        "/hint <id|n>          show a dock item's hint",
        "/open <id|n>          open an app from the dock",
        "/close                close the open window",
        "/a <value>, /b <value>  Number Play inputs",
        "/toggle <cell>        Pattern Garden cell 0-24 (or /toggle <row> <col>)",
        "/left <1-10>, /right <1-10>  Forces weights",
        "/show                 redraw the screen",
        "/session              show the session id",
        "quit                  leave",
    ]
    .join("\n")
}

/// The desktop with no app open: hero text, dock and adaptive badge.
pub fn desktop(dock: &DockView) -> String {
    [
        String::new(),
        "Play your way to understanding".bold().to_string(),
        "Open any app. Tinker. Patterns will emerge. The desktop adapts to you.".to_string(),
        String::new(),
        dock_lines(dock),
        String::new(),
        format!("{}", "✦ Adaptive mode".bright_black()),
    ]
    .join("\n")
}

pub fn dock_lines(dock: &DockView) -> String {
    if !dock.visible {
        return "The dock is hidden while an app is open (/close first).".to_string();
    }
    if dock.items.is_empty() {
        return "The dock is empty.".to_string();
    }
    dock.items
        .iter()
        .map(dock_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn dock_item(item: &DockItem) -> String {
    format!(
        "  {}. {} {}",
        item.position,
        icon_glyph(item.icon),
        item.title.bright_cyan()
    )
}

pub fn hint(item: &DockItem) -> String {
    match &item.hint {
        Some(hint) => format!("{} {}: {}", icon_glyph(item.icon), item.title, hint.italic()),
        None => format!("{} {} has no hint.", icon_glyph(item.icon), item.title),
    }
}

pub fn window(view: &WindowView<'_>) -> String {
    let title = format!(
        "┌ {} {}  {}",
        icon_glyph(view.app.resolved_icon()),
        view.app.title.bold(),
        "✕ /close".bright_black()
    );
    let body = match view.sandbox {
        Some(SandboxApp::NumberPlay(play)) => number_play_body(play),
        Some(SandboxApp::PatternGarden(garden)) => pattern_garden_body(garden),
        Some(SandboxApp::Forces(scale)) => forces_body(scale),
        None => String::new(),
    };
    if body.is_empty() {
        title
    } else {
        format!("{title}\n{body}")
    }
}

fn number_play_body(play: &NumberPlay) -> String {
    let input = |value: &str, name: &str| {
        if value.is_empty() {
            name.bright_black().to_string()
        } else {
            value.to_string()
        }
    };
    [
        number_play::PROMPT.to_string(),
        format!("  {}  +  {}", input(play.a(), "a"), input(play.b(), "b")),
        format!("  = {}", play.display_sum().bold()),
        number_play::TIP.bright_black().to_string(),
    ]
    .join("\n")
}

fn pattern_garden_body(garden: &PatternGarden) -> String {
    let mut lines = vec![pattern_garden::PROMPT.to_string()];
    for row in garden.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|on| {
                if *on {
                    "■".bright_green().to_string()
                } else {
                    "□".bright_black().to_string()
                }
            })
            .collect();
        lines.push(format!("  {}", cells.join(" ")));
    }
    lines.join("\n")
}

fn forces_body(scale: &Forces) -> String {
    let balance = match scale.balance() {
        Balance::Balanced => scale.balance().label().bright_green(),
        Balance::Tilting => scale.balance().label().yellow(),
    };
    [
        forces::PROMPT.to_string(),
        format!(
            "  {} {:>2}   {}   {:<2} {}",
            slider(scale.left()),
            scale.left(),
            balance,
            scale.right(),
            slider(scale.right())
        ),
    ]
    .join("\n")
}

fn slider(weight: u8) -> String {
    let filled = usize::from(weight);
    let empty = usize::from(MAX_WEIGHT).saturating_sub(filled);
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}
