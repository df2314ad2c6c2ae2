//! Initial institute dataset.

use crate::registry::Registry;
use eduverify_types::{ExamCategory, Fee, Institute, InstituteId, RollNumber, Student};

fn student(roll: &str, name: &str, score: &str, exam: ExamCategory) -> Student {
    Student {
        roll: RollNumber::parse(roll).expect("seed roll numbers are non-empty"),
        name: name.to_string(),
        score: score.to_string(),
        exam,
    }
}

/// The three institutes the application ships with.
pub fn seeded() -> Registry {
    Registry::with_institutes(vec![
        Institute {
            id: InstituteId::new("1"),
            name: "Chaitanya Academy".into(),
            location: "Hyderabad".into(),
            fee: Fee::new(150_000),
            phone: "9876543210".into(),
            hostel: true,
            rating: 4.8,
            students: vec![
                student("240100123", "Rahul Sharma", "99.85%tile", ExamCategory::JeeMains),
                student("ADV24001", "Anish Kumar", "AIR 450", ExamCategory::JeeAdvanced),
            ],
        },
        Institute {
            id: InstituteId::new("2"),
            name: "Vision Institute".into(),
            location: "Kota".into(),
            fee: Fee::new(210_000),
            phone: "9898989898".into(),
            hostel: true,
            rating: 4.9,
            students: vec![
                student("240100456", "Priya Singh", "99.92%tile", ExamCategory::JeeMains),
                student("NEET2405", "Sneha Reddy", "99.78%tile", ExamCategory::Neet),
            ],
        },
        Institute {
            id: InstituteId::new("3"),
            name: "Akashic Career Point".into(),
            location: "Hyderabad".into(),
            fee: Fee::new(120_000),
            phone: "9123456780".into(),
            hostel: false,
            rating: 4.5,
            students: vec![student(
                "240100789",
                "Vikram Batra",
                "98.90%tile",
                ExamCategory::JeeMains,
            )],
        },
    ])
}
