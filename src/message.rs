//! Two lines of text for [`Lcd::write_message()`](crate::lcd::Lcd::write_message)

/// Text of the first and the second line
///
/// Length is not checked, a line longer than 16 characters
/// keeps writing into the invisible part of DDRAM
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message<'a> {
    line1: &'a str,
    line2: &'a str,
}

#[allow(missing_docs)]
impl<'a> Message<'a> {
    pub fn new(line1: &'a str, line2: &'a str) -> Self {
        Self { line1, line2 }
    }

    pub fn get_line1(&self) -> &'a str {
        self.line1
    }

    pub fn get_line2(&self) -> &'a str {
        self.line2
    }
}

impl<'a> From<(&'a str, &'a str)> for Message<'a> {
    fn from((line1, line2): (&'a str, &'a str)) -> Self {
        Self::new(line1, line2)
    }
}
