use serde::Serialize;

/// A training course. Static catalog data, never persisted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const COURSES: [Course; 4] = [
    Course {
        id: "1",
        name: "Basic Mobile Repair Course",
        duration: "2 Months",
        description: "Learn fundamental mobile repair techniques",
    },
    Course {
        id: "2",
        name: "Advanced Smartphone Repair",
        duration: "3 Months",
        description: "Master advanced smartphone troubleshooting and repair",
    },
    Course {
        id: "3",
        name: "Chip Level / Motherboard Repair",
        duration: "4 Months",
        description: "Expert-level chip and motherboard repair training",
    },
    Course {
        id: "4",
        name: "Complete Mobile Technician Course",
        duration: "6 Months",
        description: "Comprehensive course covering all aspects of mobile repair",
    },
];

pub fn catalog() -> &'static [Course] {
    &COURSES
}
