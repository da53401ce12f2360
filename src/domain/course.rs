//! Course records and catalog line parsing

use std::fmt;

/// One course offering: number, title, and prerequisite course numbers.
///
/// The course number is the lookup key. Courses are ordered by the
/// lexicographic (byte-wise) ordering of their numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course number, e.g. "CSCI300"
    pub number: String,
    /// Course title
    pub name: String,
    /// Numbers of courses required before taking this one
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Parse one comma-delimited catalog line.
    ///
    /// Layout: `NUMBER,TITLE[,PREREQ...]`. Fields are trimmed; empty
    /// trailing fields (stray delimiters) are dropped. Returns `None`
    /// for lines without both a number and a title, which the loader
    /// skips rather than treating as an error.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(',').map(str::trim);
        let number = fields.next().filter(|f| !f.is_empty())?;
        let name = fields.next().filter(|f| !f.is_empty())?;
        let prerequisites = fields
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            number: number.to_string(),
            name: name.to_string(),
            prerequisites,
        })
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CSCI100,Introduction to Computer Science", "CSCI100", 0)]
    #[case("CSCI200,Data Structures,CSCI101", "CSCI200", 1)]
    #[case("CSCI300,Introduction to Algorithms,CSCI200,MATH201", "CSCI300", 2)]
    #[case(" CSCI301 , Advanced Programming in C++ , CSCI101 ", "CSCI301", 1)]
    #[case("CSCI350,Operating Systems,CSCI300,", "CSCI350", 1)]
    fn given_valid_line_when_parsing_then_fields_are_extracted(
        #[case] line: &str,
        #[case] number: &str,
        #[case] prereq_count: usize,
    ) {
        let course = Course::parse_line(line).expect("line should parse");
        assert_eq!(course.number, number);
        assert_eq!(course.prerequisites.len(), prereq_count);
    }

    #[rstest]
    #[case("")]
    #[case("CSCI100")]
    #[case("CSCI100,")]
    #[case(",Orphaned Title")]
    #[case("   ")]
    fn given_short_line_when_parsing_then_returns_none(#[case] line: &str) {
        assert_eq!(Course::parse_line(line), None);
    }

    #[test]
    fn given_course_when_displaying_then_prints_number_and_name() {
        let course = Course::parse_line("MATH201,Discrete Mathematics").unwrap();
        assert_eq!(course.to_string(), "MATH201, Discrete Mathematics");
    }
}
