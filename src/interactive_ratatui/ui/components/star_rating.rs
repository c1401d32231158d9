use crate::schemas::UserRating;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// One row of ten stars with the chosen value filled in.
pub fn rating_line(rating: Option<UserRating>) -> Line<'static> {
    let value = rating.map_or(0, UserRating::get);
    let filled = "★".repeat(value as usize);
    let empty = "☆".repeat((UserRating::MAX - value) as usize);
    let label = match rating {
        Some(r) => format!("  {r}/{}", UserRating::MAX),
        None => "  press 1-9, 0 for 10".to_string(),
    };

    Line::from(vec![
        Span::styled(filled, Style::default().fg(Color::Yellow)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().fg(Color::Gray)),
    ])
}

/// Maps a digit key to a rating value, `0` standing for 10.
pub fn digit_to_rating(c: char) -> Option<u8> {
    match c.to_digit(10)? {
        0 => Some(UserRating::MAX),
        d => Some(d as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_to_rating() {
        assert_eq!(digit_to_rating('1'), Some(1));
        assert_eq!(digit_to_rating('9'), Some(9));
        assert_eq!(digit_to_rating('0'), Some(10));
        assert_eq!(digit_to_rating('x'), None);
    }

    #[test]
    fn test_rating_line_counts_stars() {
        let line = rating_line(UserRating::new(8));
        assert_eq!(line.spans[0].content.chars().count(), 8);
        assert_eq!(line.spans[1].content.chars().count(), 2);
        assert!(line.spans[2].content.contains("8/10"));

        let line = rating_line(None);
        assert_eq!(line.spans[0].content.chars().count(), 0);
        assert_eq!(line.spans[1].content.chars().count(), 10);
    }
}
