//! Scripted pointer events for headless replay.
//!
//! Format: a JSON array of objects tagged by `kind`, for example
//! `[{"kind":"down","button":"primary","x":10,"y":20},
//!   {"kind":"move","x":15,"y":20,"dx":5,"dy":0},
//!   {"kind":"up","button":"primary"},
//!   {"kind":"wheel","delta_y":-120,"x":300,"y":200}]`.
//! `dx`/`dy` default to the offset from the previous pointer position.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Vector2;
use serde::Deserialize;
use untangle::prelude::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonName {
    Primary,
    Secondary,
    Middle,
}

impl From<ButtonName> for Button {
    fn from(b: ButtonName) -> Self {
        match b {
            ButtonName::Primary => Button::Primary,
            ButtonName::Secondary => Button::Secondary,
            ButtonName::Middle => Button::from_code(1),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Down {
        button: ButtonName,
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: Option<f64>,
        #[serde(default)]
        dy: Option<f64>,
    },
    Up {
        button: ButtonName,
    },
    Wheel {
        delta_y: f64,
        x: f64,
        y: f64,
    },
}

pub fn parse(text: &str) -> Result<Vec<Event>> {
    serde_json::from_str(text).context("parsing event script")
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text)
}

/// Feed `script` into `session`. Events the core rejects are logged and skipped;
/// returns how many were skipped.
pub fn run(session: &mut Session, script: &[Event]) -> usize {
    let mut last = Vector2::zeros();
    let mut skipped = 0;
    for (k, ev) in script.iter().enumerate() {
        let res = match *ev {
            Event::Down { button, x, y } => {
                last = Vector2::new(x, y);
                session.pointer_down(button.into(), last)
            }
            Event::Move { x, y, dx, dy } => {
                let p = Vector2::new(x, y);
                let movement = Vector2::new(dx.unwrap_or(x - last.x), dy.unwrap_or(y - last.y));
                last = p;
                session.pointer_move(p, movement)
            }
            Event::Up { button } => {
                session.pointer_up(button.into());
                Ok(())
            }
            Event::Wheel { delta_y, x, y } => {
                last = Vector2::new(x, y);
                session.wheel(delta_y, last)
            }
        };
        if let Err(err) = res {
            tracing::warn!(event = k, %err, "skipping event");
            skipped += 1;
        }
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use tempfile::tempdir;

    fn two_vertex_session(cfg: ViewCfg) -> Session {
        let g = Graph::new(
            vec![vector![0.25, 0.5], vector![0.75, 0.5]],
            vec![Edge::new(0, 1)],
        )
        .unwrap();
        Session::new(g, cfg)
    }

    #[test]
    fn parse_all_kinds() {
        let text = r#"[
            {"kind":"down","button":"secondary","x":1,"y":2},
            {"kind":"move","x":3,"y":4},
            {"kind":"move","x":3,"y":4,"dx":9,"dy":-9},
            {"kind":"up","button":"middle"},
            {"kind":"wheel","delta_y":-120,"x":5,"y":6}
        ]"#;
        let evs = parse(text).unwrap();
        assert_eq!(evs.len(), 5);
        assert_eq!(
            evs[0],
            Event::Down {
                button: ButtonName::Secondary,
                x: 1.0,
                y: 2.0
            }
        );
        assert_eq!(
            evs[1],
            Event::Move {
                x: 3.0,
                y: 4.0,
                dx: None,
                dy: None
            }
        );
        assert!(parse(r#"[{"kind":"teleport"}]"#).is_err());
    }

    #[test]
    fn load_from_file_and_drag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("script.json");
        // vertex 0 sits at (300, 350) on a 1200x700 screen
        fs::write(
            &path,
            r#"[{"kind":"down","button":"primary","x":300,"y":350},
                {"kind":"move","x":600,"y":175},
                {"kind":"up","button":"primary"}]"#,
        )
        .unwrap();
        let script = load(&path).unwrap();
        let mut s = two_vertex_session(ViewCfg::default());
        assert_eq!(run(&mut s, &script), 0);
        assert!((s.graph().vertex(0) - vector![0.5, 0.25]).norm() < 1e-9);
        assert_eq!(s.pointer(), PointerState::Idle);
    }

    #[test]
    fn implicit_movement_pans_by_offset() {
        let script = parse(
            r#"[{"kind":"down","button":"primary","x":10,"y":10},
                {"kind":"move","x":30,"y":0},
                {"kind":"up","button":"primary"}]"#,
        )
        .unwrap();
        let mut s = two_vertex_session(ViewCfg::default());
        run(&mut s, &script);
        let v = s.scene().vertices[0];
        assert!((v - vector![320.0, 340.0]).norm() < 1e-9);
    }

    #[test]
    fn singular_events_are_skipped() {
        let cfg = ViewCfg {
            screen_size: vector![0.0, 0.0],
            ..ViewCfg::default()
        };
        let script = parse(
            r#"[{"kind":"down","button":"secondary","x":1,"y":1},
                {"kind":"up","button":"secondary"}]"#,
        )
        .unwrap();
        let mut s = two_vertex_session(cfg);
        assert_eq!(run(&mut s, &script), 1);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
