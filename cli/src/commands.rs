//! REPL command handlers. Each returns the text to print.

use match_counter_core::Trigger;
use match_counter_core::template::{Directive, Template};
use match_counter_types::formatting::format_record;

use crate::host::Host;

pub fn trigger(host: &mut Host, source: usize, trigger: Trigger) -> Result<String, String> {
    let source = host.source_mut(source)?;
    source.handle(trigger);
    Ok(format!("{}: {}\n", source.name(), source.text()))
}

pub fn press(host: &mut Host, source: usize, key: &str) -> Result<String, String> {
    let source = host.source_mut(source)?;
    match source.press_hotkey(key) {
        Some(trigger) => Ok(format!("{} -> {}: {}\n", key, trigger.label(), source.text())),
        None => Err(format!("error: no hotkey bound to {key:?}\n")),
    }
}

pub fn set_wins(host: &mut Host, source: usize, wins: i32) -> Result<String, String> {
    let source = host.source_mut(source)?;
    source.edit(|c| c.set_wins(wins));
    Ok(format!("{}: {}\n", source.name(), source.text()))
}

pub fn set_losses(host: &mut Host, source: usize, losses: i32) -> Result<String, String> {
    let source = host.source_mut(source)?;
    source.edit(|c| c.set_losses(losses));
    Ok(format!("{}: {}\n", source.name(), source.text()))
}

pub fn set_format(host: &mut Host, format: &str) -> Result<String, String> {
    let unknown = Template::parse(format).unknown_directives();
    host.settings.format = format.to_string();
    host.apply_settings();

    let mut out = show(host);
    if !unknown.is_empty() {
        let list: Vec<String> = unknown.iter().map(|c| format!("%{c}")).collect();
        out.push_str(&format!(
            "note: {} shown as written (see `directives`)\n",
            list.join(", ")
        ));
    }
    Ok(out)
}

pub fn set_name(host: &mut Host, name: &str) -> Result<String, String> {
    host.settings.player_name = Some(name.to_string());
    host.apply_settings();
    Ok(show(host))
}

pub fn show(host: &Host) -> String {
    host.sources()
        .iter()
        .enumerate()
        .map(|(i, s)| format!("[{}] {}\n", i, s.text()))
        .collect()
}

pub fn stats(host: &Host) -> String {
    let mut out = format!("lifecycle: {:?}\n", host.lifecycle());
    for (i, source) in host.sources().iter().enumerate() {
        let snapshot = source.snapshot();
        out.push_str(&format!(
            "[{}] {} record {} win rate {}\n",
            i,
            source.name(),
            format_record(snapshot.wins, snapshot.losses),
            snapshot.win_rate_text
        ));
    }
    for (id, key) in host.settings.hotkeys.bindings() {
        out.push_str(&format!("hotkey {key}: {id}\n"));
    }
    out
}

pub fn directives() -> String {
    let mut out: String = Directive::ALL
        .iter()
        .map(|d| format!("%{}  {}\n", d.as_char(), d.description()))
        .collect();
    out.push_str("any other %c is shown as written\n");
    out
}

pub fn save(host: &mut Host) -> Result<String, String> {
    let location = host.save()?;
    let mut out = format!("saved to {location}\n");
    let unsaved = host.unsaved_sources();
    if unsaved > 0 {
        out.push_str(&format!(
            "note: only source-0's score is saved; {unsaved} other source(s) not recorded\n"
        ));
    }
    Ok(out)
}
