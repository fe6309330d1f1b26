//! A single step in a bond-laddering strategy: buy a bond, or wait.

use crate::error::{LadderError, LadderResult};
use std::fmt;

/// One step of a reconstructed action sequence.
///
/// Sequences are ordered by non-decreasing `start_month`; adjacent `Wait`
/// steps are always merged into one (see `ladder_algo::optimizer`'s path
/// reconstruction and Scenario F in spec.md §8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buy a bond of `tenor` months at `start_month`.
    Buy { start_month: u32, tenor: u32 },
    /// Hold cash for `length` months starting at `start_month`.
    Wait { start_month: u32, length: u32 },
}

impl Action {
    /// Construct a `Buy`, rejecting a zero tenor.
    pub fn buy(start_month: u32, tenor: u32) -> LadderResult<Self> {
        if tenor == 0 {
            return Err(LadderError::InvalidAction(
                "buy tenor must be > 0".to_string(),
            ));
        }
        Ok(Action::Buy { start_month, tenor })
    }

    /// Construct a `Wait`, rejecting a zero length.
    pub fn wait(start_month: u32, length: u32) -> LadderResult<Self> {
        if length == 0 {
            return Err(LadderError::InvalidAction(
                "wait length must be > 0".to_string(),
            ));
        }
        Ok(Action::Wait {
            start_month,
            length,
        })
    }

    /// The month this action begins at.
    pub fn start_month(&self) -> u32 {
        match self {
            Action::Buy { start_month, .. } => *start_month,
            Action::Wait { start_month, .. } => *start_month,
        }
    }

    /// The month this action ends at (start + duration).
    pub fn end_month(&self) -> u32 {
        match self {
            Action::Buy { start_month, tenor } => start_month + tenor,
            Action::Wait {
                start_month,
                length,
            } => start_month + length,
        }
    }

    /// Render in short form: `b<tenor>` or `w<length>`.
    pub fn to_short_form(&self) -> String {
        match self {
            Action::Buy { tenor, .. } => format!("b{tenor}"),
            Action::Wait { length, .. } => format!("w{length}"),
        }
    }

    /// Render in the writer's verbose form, e.g. `Month 3: buy 6-month bond`
    /// or `Month 0: wait for 2 months` / `Month 0: wait for 1 month`.
    pub fn to_verbose_form(&self) -> String {
        match self {
            Action::Buy { start_month, tenor } => {
                format!("Month {start_month}: buy {tenor}-month bond")
            }
            Action::Wait {
                start_month,
                length,
            } => {
                if *length == 1 {
                    format!("Month {start_month}: wait for 1 month")
                } else {
                    format!("Month {start_month}: wait for {length} months")
                }
            }
        }
    }

    /// Parse a single action from its short form (`b6`, `w2`). This is the
    /// left inverse of [`Action::to_short_form`]; `start_month` must be
    /// supplied separately since the short form doesn't carry it.
    pub fn parse_short_form(s: &str, start_month: u32) -> LadderResult<Self> {
        let bad = || LadderError::InvalidAction(format!("not a valid short-form action: {s}"));
        let (tag, rest) = s.split_at(1.min(s.len()));
        match tag {
            "b" => {
                let tenor: u32 = rest.parse().map_err(|_| bad())?;
                Action::buy(start_month, tenor)
            }
            "w" => {
                let length: u32 = rest.parse().map_err(|_| bad())?;
                Action::wait(start_month, length)
            }
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_short_form())
    }
}

/// Render a full action sequence in short form, comma-separated, as the
/// results writer does for the default (non-verbose) CSV column.
pub fn sequence_to_short_form(actions: &[Action]) -> String {
    actions
        .iter()
        .map(Action::to_short_form)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated short-form sequence back into `Action`s,
/// reconstructing each `start_month` from the running total of prior
/// durations. This is the round-trip inverse required by spec.md §8.
pub fn sequence_from_short_form(s: &str) -> LadderResult<Vec<Action>> {
    let mut month = 0u32;
    let mut actions = Vec::new();
    for tok in s.split(',').filter(|t| !t.is_empty()) {
        let action = Action::parse_short_form(tok, month)?;
        month = action.end_month();
        actions.push(action);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_duration() {
        assert!(Action::buy(0, 0).is_err());
        assert!(Action::wait(0, 0).is_err());
    }

    #[test]
    fn short_form_round_trip() {
        let actions = vec![
            Action::buy(0, 6).unwrap(),
            Action::buy(6, 3).unwrap(),
            Action::buy(9, 3).unwrap(),
        ];
        let rendered = sequence_to_short_form(&actions);
        assert_eq!(rendered, "b6,b3,b3");
        let parsed = sequence_from_short_form(&rendered).unwrap();
        assert_eq!(parsed, actions);
    }

    #[test]
    fn short_form_round_trip_with_waits() {
        let actions = vec![
            Action::wait(0, 2).unwrap(),
            Action::buy(2, 3).unwrap(),
            Action::buy(5, 6).unwrap(),
            Action::wait(11, 1).unwrap(),
        ];
        let rendered = sequence_to_short_form(&actions);
        assert_eq!(rendered, "w2,b3,b6,w1");
        assert_eq!(sequence_from_short_form(&rendered).unwrap(), actions);
    }

    #[test]
    fn verbose_form_singular_plural() {
        let one = Action::wait(0, 1).unwrap();
        let many = Action::wait(0, 2).unwrap();
        assert_eq!(one.to_verbose_form(), "Month 0: wait for 1 month");
        assert_eq!(many.to_verbose_form(), "Month 0: wait for 2 months");

        let buy = Action::buy(3, 6).unwrap();
        assert_eq!(buy.to_verbose_form(), "Month 3: buy 6-month bond");
    }

    #[test]
    fn empty_sequence_round_trips() {
        assert_eq!(sequence_to_short_form(&[]), "");
        assert_eq!(sequence_from_short_form("").unwrap(), vec![]);
    }
}
