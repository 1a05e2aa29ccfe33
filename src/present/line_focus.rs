use crate::highlight::Line;

/// Line-by-line highlight cursor for one code block.
///
/// The cursor steps over non-blank lines only; blank lines are never
/// independently focusable. It starts unset (whole block unhighlighted) and
/// moves only forward into the focused state: once a line is focused,
/// retreating from the first non-blank line stays there rather than
/// returning to the unset state. A block that didn't opt into highlighting
/// ignores stepping entirely.
#[derive(Debug, Clone)]
pub struct LineFocus {
    enabled: bool,
    non_blank: Vec<usize>,
    cursor: Option<usize>,
}

impl LineFocus {
    pub fn new(lines: &[Line], enabled: bool) -> Self {
        let non_blank = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_blank())
            .map(|(index, _)| index)
            .collect();
        Self {
            enabled,
            non_blank,
            cursor: None,
        }
    }

    pub fn advance(&mut self) {
        if !self.enabled {
            return;
        }
        match self.cursor {
            None => {
                if !self.non_blank.is_empty() {
                    self.cursor = Some(0);
                }
            }
            Some(at) if at + 1 < self.non_blank.len() => {
                self.cursor = Some(at + 1);
            }
            Some(_) => {}
        }
    }

    pub fn retreat(&mut self) {
        if !self.enabled {
            return;
        }
        match self.cursor {
            None | Some(0) => {}
            Some(at) => self.cursor = Some(at - 1),
        }
    }

    /// The focused line's index within the full line list, if any
    pub fn focused_line(&self) -> Option<usize> {
        self.cursor.map(|at| self.non_blank[at])
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{tokenize, NoGrammar};

    fn focus(source: &str, enabled: bool) -> LineFocus {
        LineFocus::new(&tokenize(source, &NoGrammar), enabled)
    }

    #[test]
    fn test_advance_skips_blank_lines() {
        // lines: 0 "a", 1 "", 2 "b"
        let mut focus = focus("a\n\nb", true);
        assert_eq!(focus.focused_line(), None);
        focus.advance();
        assert_eq!(focus.focused_line(), Some(0));
        focus.advance();
        assert_eq!(focus.focused_line(), Some(2));
    }

    #[test]
    fn test_advance_sticks_at_last_line() {
        let mut focus = focus("a\nb", true);
        for _ in 0..5 {
            focus.advance();
        }
        assert_eq!(focus.focused_line(), Some(1));
    }

    #[test]
    fn test_retreat_before_any_advance_is_noop() {
        let mut focus = focus("a\nb", true);
        focus.retreat();
        assert_eq!(focus.focused_line(), None);
    }

    #[test]
    fn retreat_from_first_line_stays_focused() {
        // the cursor never returns to the unset state once a line is focused
        let mut focus = focus("a\nb", true);
        focus.advance();
        focus.advance();
        focus.retreat();
        assert_eq!(focus.focused_line(), Some(0));
        focus.retreat();
        assert_eq!(focus.focused_line(), Some(0));
    }

    #[test]
    fn test_disabled_block_ignores_stepping() {
        let mut focus = focus("a\nb", false);
        focus.advance();
        assert_eq!(focus.focused_line(), None);
    }

    #[test]
    fn test_all_blank_block_never_focuses() {
        let mut focus = focus("\n   \n", true);
        focus.advance();
        assert_eq!(focus.focused_line(), None);
    }

    #[test]
    fn test_full_walk_matches_non_blank_count() {
        let source = "fn a() {\n\n    one();\n    two();\n}\n";
        // non-blank lines: 0, 2, 3, 4
        let mut focus = focus(source, true);
        let mut visited = Vec::new();
        for _ in 0..4 {
            focus.advance();
            visited.push(focus.focused_line().unwrap());
        }
        assert_eq!(visited, vec![0, 2, 3, 4]);
        focus.advance();
        assert_eq!(focus.focused_line(), Some(4));
    }
}
