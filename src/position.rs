//! Symbolic relative placement: `Position` and its keyword parser.
//!
//! A `Position` names a spot on a rectangle ("left top", "center bottom", ...)
//! without committing to coordinates. Parsing is lenient: unknown words fall
//! back to `center`, a single keyword is padded with `center`, and the axis of
//! an ambiguous word is inferred from the other word. The order of the source
//! tokens is remembered as `precedence`, so a parsed position serializes back
//! in the order it was written.

use std::fmt;

use logos::Logos;

use crate::geometry::Axis;

/// Horizontal placement keyword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    #[default]
    Center,
    Right,
}

impl Horizontal {
    /// The CSS-style keyword for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        }
    }

    /// Mirror across the vertical midline; `center` stays put.
    pub const fn reversed(self) -> Horizontal {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
            Horizontal::Center => Horizontal::Center,
        }
    }
}

/// Vertical placement keyword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vertical {
    Top,
    #[default]
    Center,
    Bottom,
}

impl Vertical {
    /// The CSS-style keyword for this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Vertical::Top => "top",
            Vertical::Center => "center",
            Vertical::Bottom => "bottom",
        }
    }

    /// Mirror across the horizontal midline; `center` stays put.
    pub const fn reversed(self) -> Vertical {
        match self {
            Vertical::Top => Vertical::Bottom,
            Vertical::Bottom => Vertical::Top,
            Vertical::Center => Vertical::Center,
        }
    }
}

/// Placement keyword token.
///
/// Anything that is not one of the four edge keywords (including `center`
/// itself) classifies as centered with no inherent axis.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Keyword {
    #[token("left")]
    Left,

    #[token("right")]
    Right,

    #[token("top")]
    Top,

    #[token("bottom")]
    Bottom,

    #[token("center")]
    Center,

    /// Any other word; treated as `center` with an inferred axis.
    #[regex(r"[^ \t\n\r]+", priority = 1)]
    Other,
}

impl Keyword {
    /// The axis this keyword inherently belongs to, if any.
    fn axis(self) -> Option<Axis> {
        match self {
            Keyword::Left | Keyword::Right => Some(Axis::X),
            Keyword::Top | Keyword::Bottom => Some(Axis::Y),
            _ => None,
        }
    }
}

/// A relative position descriptor: one keyword per axis, plus the axis the
/// source string named first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: Horizontal,
    pub y: Vertical,
    /// Which axis was named first; drives [`Position::parts`] and `Display`.
    pub precedence: Axis,
}

impl Position {
    /// Create a position with x-axis precedence.
    pub const fn new(x: Horizontal, y: Vertical) -> Self {
        Self { x, y, precedence: Axis::X }
    }

    /// Override which axis is considered primary.
    pub const fn with_precedence(mut self, precedence: Axis) -> Self {
        self.precedence = precedence;
        self
    }

    /// Parse a position string like `"left top"`, `"top left"`, or `"right"`.
    ///
    /// Never fails: unknown words become `center`, a missing second keyword
    /// is `center`, and an empty string is fully centered.
    pub fn parse(input: &str) -> Position {
        let mut tokens: Vec<Keyword> = Keyword::lexer(input)
            .filter_map(Result::ok)
            .take(2)
            .collect();

        if tokens.is_empty() {
            tokens.push(Keyword::Other);
        }
        if tokens.len() == 1 {
            tokens.push(Keyword::Center);
        }

        // Classify each token to an axis; a token with no inherent axis
        // takes whichever axis the other token did not claim.
        let first = tokens[0].axis();
        let second = tokens[1].axis();
        let first = first.unwrap_or(match second {
            Some(Axis::X) => Axis::Y,
            _ => Axis::X,
        });
        let second = second.unwrap_or(first.opposite());

        let mut pos = Position::new(Horizontal::Center, Vertical::Center)
            .with_precedence(first);

        for (axis, token) in [(first, tokens[0]), (second, tokens[1])] {
            match axis {
                Axis::X => {
                    pos.x = match token {
                        Keyword::Left => Horizontal::Left,
                        Keyword::Right => Horizontal::Right,
                        _ => Horizontal::Center,
                    };
                }
                Axis::Y => {
                    pos.y = match token {
                        Keyword::Top => Vertical::Top,
                        Keyword::Bottom => Vertical::Bottom,
                        _ => Vertical::Center,
                    };
                }
            }
        }

        pos
    }

    /// The mirrored position: left<->right, top<->bottom, center unchanged.
    /// Precedence is preserved.
    pub const fn reverse(self) -> Position {
        Position {
            x: self.x.reversed(),
            y: self.y.reversed(),
            precedence: self.precedence,
        }
    }

    /// The axes in precedence order.
    pub const fn order(self) -> [Axis; 2] {
        match self.precedence {
            Axis::X => [Axis::X, Axis::Y],
            Axis::Y => [Axis::Y, Axis::X],
        }
    }

    /// The keywords in precedence order.
    pub const fn parts(self) -> [&'static str; 2] {
        match self.precedence {
            Axis::X => [self.x.as_str(), self.y.as_str()],
            Axis::Y => [self.y.as_str(), self.x.as_str()],
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(Horizontal::Center, Vertical::Center)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.parts();
        write!(f, "{} {}", first, second)
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Position::parse(s)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_left_top() {
        let pos = Position::parse("left top");
        assert_eq!(pos.x, Horizontal::Left);
        assert_eq!(pos.y, Vertical::Top);
        assert_eq!(pos.precedence, Axis::X);
    }

    #[test]
    fn parse_top_left() {
        let pos = Position::parse("top left");
        assert_eq!(pos.x, Horizontal::Left);
        assert_eq!(pos.y, Vertical::Top);
        assert_eq!(pos.precedence, Axis::Y);
    }

    #[test]
    fn parse_single_keyword_pads_center() {
        let pos = Position::parse("left");
        assert_eq!(pos.x, Horizontal::Left);
        assert_eq!(pos.y, Vertical::Center);
        assert_eq!(pos.precedence, Axis::X);

        let pos = Position::parse("bottom");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Bottom);
        assert_eq!(pos.precedence, Axis::Y);
    }

    #[test]
    fn parse_center_claims_unclaimed_axis() {
        // "center top": y is claimed, so the leading center is the x part.
        let pos = Position::parse("center top");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Top);
        assert_eq!(pos.precedence, Axis::X);

        // "top center": center fills the x slot, precedence stays with y.
        let pos = Position::parse("top center");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Top);
        assert_eq!(pos.precedence, Axis::Y);
    }

    #[test]
    fn parse_unknown_word_is_center() {
        let pos = Position::parse("blah top");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Top);
        assert_eq!(pos.precedence, Axis::X);
    }

    #[test]
    fn parse_empty_is_fully_centered() {
        let pos = Position::parse("");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Center);
        assert_eq!(pos.precedence, Axis::X);
    }

    #[test]
    fn parse_bare_center() {
        let pos = Position::parse("center");
        assert_eq!(pos.x, Horizontal::Center);
        assert_eq!(pos.y, Vertical::Center);
        assert_eq!(pos.precedence, Axis::X);
    }

    #[test]
    fn parse_extra_tokens_ignored() {
        let pos = Position::parse("left top bottom");
        assert_eq!(pos.x, Horizontal::Left);
        assert_eq!(pos.y, Vertical::Top);
    }

    #[test]
    fn parse_duplicate_axis_last_wins() {
        let pos = Position::parse("left right");
        assert_eq!(pos.x, Horizontal::Right);
        assert_eq!(pos.y, Vertical::Center);
        assert_eq!(pos.precedence, Axis::X);
    }

    #[test]
    fn parse_whitespace_tolerant() {
        let pos = Position::parse("  right \t bottom ");
        assert_eq!(pos.x, Horizontal::Right);
        assert_eq!(pos.y, Vertical::Bottom);
    }

    // -----------------------------------------------------------------------
    // Round-trips and precedence
    // -----------------------------------------------------------------------

    #[test]
    fn roundtrip_preserves_token_order() {
        assert_eq!(Position::parse("left top").to_string(), "left top");
        assert_eq!(Position::parse("top left").to_string(), "top left");
        assert_eq!(Position::parse("right center").to_string(), "right center");
    }

    #[test]
    fn single_keyword_roundtrip() {
        assert_eq!(Position::parse("left").to_string(), "left center");
        assert_eq!(Position::parse("top").to_string(), "top center");
    }

    #[test]
    fn order_follows_precedence() {
        assert_eq!(Position::parse("left top").order(), [Axis::X, Axis::Y]);
        assert_eq!(Position::parse("top left").order(), [Axis::Y, Axis::X]);
    }

    #[test]
    fn parts_follow_precedence() {
        assert_eq!(Position::parse("left top").parts(), ["left", "top"]);
        assert_eq!(Position::parse("top left").parts(), ["top", "left"]);
    }

    // -----------------------------------------------------------------------
    // reverse
    // -----------------------------------------------------------------------

    #[test]
    fn reverse_flips_edges() {
        let pos = Position::new(Horizontal::Left, Vertical::Top);
        assert_eq!(pos.reverse().to_string(), "right bottom");
    }

    #[test]
    fn reverse_keeps_center() {
        let pos = Position::parse("center center");
        assert_eq!(pos.reverse(), pos);
    }

    #[test]
    fn reverse_does_not_mutate() {
        let pos = Position::parse("left top");
        let _ = pos.reverse();
        assert_eq!(pos.to_string(), "left top");
    }

    #[test]
    fn reverse_keeps_precedence() {
        let pos = Position::parse("top left");
        assert_eq!(pos.reverse().to_string(), "bottom right");
    }
}
