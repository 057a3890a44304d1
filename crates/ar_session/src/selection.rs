use serde::{Deserialize, Serialize};

/// Bounding box of a text selection, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the "ask about this" popup is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSelection {
    pub text: String,
    pub anchor: Anchor,
}

impl TextSelection {
    /// Capture a selection made on pointer release. Whitespace-only
    /// selections are not captured.
    pub fn capture(raw: &str, rect: SelectionRect) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            anchor: Anchor {
                x: rect.left + rect.width / 2.0,
                y: rect.top,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_centers_anchor() {
        let rect = SelectionRect {
            left: 100.0,
            top: 40.0,
            width: 60.0,
            height: 18.0,
        };
        let selection = TextSelection::capture("  맞춤형 학습 ", rect).unwrap();
        assert_eq!(selection.text, "맞춤형 학습");
        assert_eq!(selection.anchor, Anchor { x: 130.0, y: 40.0 });
    }

    #[test]
    fn test_capture_ignores_blank() {
        assert!(TextSelection::capture(" \n ", SelectionRect::default()).is_none());
    }
}
