//! The student record placed on a seat.

/// Roll number printed on the student's admission card.
pub type RollNumber = i32;

/// A student sitting the exam.
///
/// Fields are private and there are no setters: once built, a `Student` never
/// changes.  Ownership moves into the [`Seat`](super::seat::Seat) it is
/// assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    roll_number: RollNumber,
    domain: String,
}

impl Student {
    /// Creates a new student record.
    pub fn new(name: impl Into<String>, roll_number: RollNumber, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roll_number,
            domain: domain.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> RollNumber {
        self.roll_number
    }

    /// Free-form category label used by the domain cap (e.g. `"CS"`).
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_exposes_all_fields() {
        let student = Student::new("Asha", 1021, "CS");
        assert_eq!(student.name(), "Asha");
        assert_eq!(student.roll_number(), 1021);
        assert_eq!(student.domain(), "CS");
    }

    #[test]
    fn test_students_with_same_fields_are_equal() {
        assert_eq!(Student::new("Asha", 1, "CS"), Student::new("Asha", 1, "CS"));
        assert_ne!(Student::new("Asha", 1, "CS"), Student::new("Asha", 1, "cs"));
    }
}
