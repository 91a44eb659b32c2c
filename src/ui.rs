//! HUD text and button visibility
//!
//! The DOM (or any other front end) implements [`Hud`]; [`apply_events`]
//! pushes game events to it synchronously.

use crate::sim::GameEvent;

pub const GAME_OVER_TITLE: &str = "Game Over";

/// Front-end surface driven by game events
pub trait Hud {
    fn set_score_text(&mut self, text: &str);
    fn set_rings_text(&mut self, text: &str);
    /// Show the two-line game-over banner
    fn show_game_over(&mut self, title: &str, detail: &str);
    fn hide_game_over(&mut self);
    fn set_start_visible(&mut self, visible: bool);
    fn set_restart_visible(&mut self, visible: bool);
}

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn rings_label(rings: u32) -> String {
    format!("Rings: {}", rings)
}

pub fn multiplier_label(speed_multiplier: f64) -> String {
    format!("Speed Multiplier: {:.2}x", speed_multiplier)
}

/// Push every HUD-relevant event to the front end, in order
pub fn apply_events(hud: &mut impl Hud, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::CountdownStarted { .. } => hud.set_start_visible(false),
            GameEvent::RunStarted => {
                hud.hide_game_over();
                hud.set_restart_visible(false);
            }
            GameEvent::ScoreChanged { score } => hud.set_score_text(&score_label(*score)),
            GameEvent::RingsChanged { rings } => hud.set_rings_text(&rings_label(*rings)),
            GameEvent::GameOver {
                speed_multiplier, ..
            } => {
                hud.show_game_over(GAME_OVER_TITLE, &multiplier_label(*speed_multiplier));
                hud.set_restart_visible(true);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHud {
        score: String,
        rings: String,
        banner: Option<(String, String)>,
        start_visible: bool,
        restart_visible: bool,
    }

    impl Hud for RecordingHud {
        fn set_score_text(&mut self, text: &str) {
            self.score = text.to_string();
        }
        fn set_rings_text(&mut self, text: &str) {
            self.rings = text.to_string();
        }
        fn show_game_over(&mut self, title: &str, detail: &str) {
            self.banner = Some((title.to_string(), detail.to_string()));
        }
        fn hide_game_over(&mut self) {
            self.banner = None;
        }
        fn set_start_visible(&mut self, visible: bool) {
            self.start_visible = visible;
        }
        fn set_restart_visible(&mut self, visible: bool) {
            self.restart_visible = visible;
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(score_label(300), "Score: 300");
        assert_eq!(rings_label(3), "Rings: 3");
        assert_eq!(multiplier_label(1.0), "Speed Multiplier: 1.00x");
        assert_eq!(multiplier_label(2.25), "Speed Multiplier: 2.25x");
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut hud = RecordingHud {
            start_visible: true,
            ..Default::default()
        };

        apply_events(
            &mut hud,
            &[
                GameEvent::CountdownStarted { ticks: 180 },
                GameEvent::RunStarted,
                GameEvent::ScoreChanged { score: 200 },
                GameEvent::RingsChanged { rings: 2 },
                GameEvent::GameOver {
                    score: 200,
                    rings: 2,
                    speed_multiplier: 1.5,
                },
            ],
        );
        assert!(!hud.start_visible);
        assert_eq!(hud.score, "Score: 200");
        assert_eq!(hud.rings, "Rings: 2");
        assert_eq!(
            hud.banner,
            Some(("Game Over".to_string(), "Speed Multiplier: 1.50x".to_string()))
        );
        assert!(hud.restart_visible);

        apply_events(&mut hud, &[GameEvent::RunStarted]);
        assert!(hud.banner.is_none());
        assert!(!hud.restart_visible);
    }
}
