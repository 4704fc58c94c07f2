use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use pagewire_core::motion::{Clock, ManualClock};
use pagewire_core::{AppConfig, PageCommand, PageEvent, PageRuntime};
use pagewire_tui::widgets::describe_event;

/// Tab group named by position or by name
#[derive(Debug, Clone, PartialEq)]
enum GroupRef {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Input {
    Click { group: GroupRef, index: usize },
    Scroll { delta: f64 },
}

#[derive(Debug, Clone, PartialEq)]
struct Scheduled {
    at: Duration,
    input: Input,
}

#[derive(Serialize)]
struct Summary {
    until_ms: u64,
    events: usize,
    scroll_y: f64,
    active_tabs: Vec<TabSummary>,
}

#[derive(Serialize)]
struct TabSummary {
    group: String,
    active: Option<usize>,
}

/// Split "VALUE@MS"
fn split_at_time(s: &str) -> Result<(&str, Duration)> {
    let (value, at) = s
        .rsplit_once('@')
        .ok_or_else(|| anyhow!("missing '@MS' in '{}'", s))?;
    let ms: u64 = at
        .trim()
        .parse()
        .with_context(|| format!("invalid time in '{}'", s))?;
    Ok((value.trim(), Duration::from_millis(ms)))
}

/// Parse "GROUP:INDEX@MS"
fn parse_click(s: &str) -> Result<Scheduled> {
    let (target, at) = split_at_time(s)?;
    let (group, index) = target
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected GROUP:INDEX in '{}'", s))?;
    let index: usize = index
        .parse()
        .with_context(|| format!("invalid tab index in '{}'", s))?;
    if group.is_empty() {
        bail!("missing tab group in '{}'", s);
    }
    let group = match group.parse::<usize>() {
        Ok(position) => GroupRef::Index(position),
        Err(_) => GroupRef::Name(group.to_string()),
    };
    Ok(Scheduled {
        at,
        input: Input::Click { group, index },
    })
}

/// Parse "DELTA@MS"
fn parse_scroll(s: &str) -> Result<Scheduled> {
    let (delta, at) = split_at_time(s)?;
    let delta: f64 = delta
        .parse()
        .with_context(|| format!("invalid scroll delta in '{}'", s))?;
    Ok(Scheduled {
        at,
        input: Input::Scroll { delta },
    })
}

fn to_command(runtime: &PageRuntime, input: &Input) -> Result<PageCommand> {
    match input {
        Input::Click { group, index } => {
            let group = match group {
                GroupRef::Index(position) => *position,
                GroupRef::Name(name) => runtime
                    .tab_groups()
                    .iter()
                    .position(|g| g.name() == name)
                    .ok_or_else(|| anyhow!("no tab group named '{}'", name))?,
            };
            Ok(PageCommand::ClickTab {
                group,
                index: *index,
            })
        }
        Input::Scroll { delta } => Ok(PageCommand::ScrollBy { delta: *delta }),
    }
}

struct Printer {
    json: bool,
    count: usize,
}

impl Printer {
    fn print(&mut self, events: Vec<PageEvent>) -> Result<()> {
        for event in events {
            self.count += 1;
            if self.json {
                println!("{}", serde_json::to_string(&event)?);
            } else {
                println!("{}", describe_event(&event));
            }
        }
        Ok(())
    }
}

pub fn run(
    config: &AppConfig,
    until_ms: u64,
    step_ms: u64,
    clicks: &[String],
    scrolls: &[String],
    json: bool,
) -> Result<()> {
    if step_ms == 0 {
        bail!("--step-ms must be greater than zero");
    }

    let mut schedule = clicks
        .iter()
        .map(|s| parse_click(s))
        .chain(scrolls.iter().map(|s| parse_scroll(s)))
        .collect::<Result<Vec<_>>>()?;
    schedule.sort_by_key(|s| s.at);
    let mut pending = VecDeque::from(schedule);

    let clock = ManualClock::new();
    let until = Duration::from_millis(until_ms);
    let step = Duration::from_millis(step_ms);

    let mut runtime = PageRuntime::from_config(config, clock.now())?;
    let mut printer = Printer { json, count: 0 };
    printer.print(runtime.tick(clock.now()))?;

    while clock.now() < until {
        let next_frame = (clock.now() + step).min(until);

        // Inputs land at their exact time, between frames
        while pending.front().is_some_and(|s| s.at <= next_frame) {
            let Some(scheduled) = pending.pop_front() else {
                break;
            };
            clock.set(scheduled.at.max(clock.now()));
            let command = to_command(&runtime, &scheduled.input)?;
            if let Err(e) = runtime.dispatch(command, clock.now()) {
                eprintln!("Input at {}ms failed: {}", clock.now().as_millis(), e);
            }
            printer.print(runtime.tick(clock.now()))?;
        }

        clock.set(next_frame);
        printer.print(runtime.tick(clock.now()))?;
    }

    if json {
        let summary = Summary {
            until_ms,
            events: printer.count,
            scroll_y: runtime.scroll_y(),
            active_tabs: runtime
                .tab_groups()
                .iter()
                .map(|g| TabSummary {
                    group: g.name().to_string(),
                    active: g.marked_index(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("\n{} events in {}ms", printer.count, until_ms);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(
            parse_click("features:2@1200").unwrap(),
            Scheduled {
                at: Duration::from_millis(1200),
                input: Input::Click {
                    group: GroupRef::Name("features".to_string()),
                    index: 2
                },
            }
        );
        assert_eq!(
            parse_click("0:1@0").unwrap().input,
            Input::Click {
                group: GroupRef::Index(0),
                index: 1
            }
        );
    }

    #[test]
    fn test_parse_click_rejects_garbage() {
        assert!(parse_click("features:2").is_err());
        assert!(parse_click("features@100").is_err());
        assert!(parse_click(":1@100").is_err());
        assert!(parse_click("features:x@100").is_err());
        assert!(parse_click("features:1@soon").is_err());
    }

    #[test]
    fn test_parse_scroll() {
        let scheduled = parse_scroll("-240@5000").unwrap();
        assert_eq!(scheduled.at, Duration::from_millis(5000));
        assert_eq!(scheduled.input, Input::Scroll { delta: -240.0 });
    }

    #[test]
    fn test_group_names_resolve() {
        let runtime = PageRuntime::from_config(&AppConfig::default(), Duration::ZERO).unwrap();
        let click = Input::Click {
            group: GroupRef::Name("features".to_string()),
            index: 1,
        };
        assert_eq!(
            to_command(&runtime, &click).unwrap(),
            PageCommand::ClickTab { group: 0, index: 1 }
        );

        let missing = Input::Click {
            group: GroupRef::Name("pricing".to_string()),
            index: 1,
        };
        assert!(to_command(&runtime, &missing).is_err());
    }
}
