/// Controls whether a [`LineSink`](crate::LineSink) terminates each rendered line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline unless the formatted message already ends with one.
    #[default]
    WithNewline,
    /// Emit the rendered message exactly as formatted.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates lines that lack a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    #[test]
    fn default_terminates_lines() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversions_agree() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

        let append: bool = LineMode::WithNewline.into();
        assert!(append);
        let append: bool = LineMode::WithoutNewline.into();
        assert!(!append);
    }
}
