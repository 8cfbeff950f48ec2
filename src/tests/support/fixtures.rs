use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::modules::project::application::{
    domain::entities::Project, ports::outgoing::NewProject,
};
use crate::modules::review::application::{
    domain::entities::Review, ports::outgoing::NewReview,
};

pub fn review(id: i64, is_approved: bool) -> Review {
    review_from(
        id,
        NewReview {
            student_name: "Asha Rao".into(),
            college_name: "RV College".into(),
            year_of_study: "Final year".into(),
            project_name: "Smart attendance".into(),
            rating: 5,
            experience: "Delivered before the review.".into(),
            pricing_review: None,
            is_approved,
        },
    )
}

pub fn review_from(id: i64, new: NewReview) -> Review {
    Review {
        id,
        student_name: new.student_name,
        college_name: new.college_name,
        year_of_study: new.year_of_study,
        project_name: new.project_name,
        rating: new.rating,
        experience: new.experience,
        pricing_review: new.pricing_review,
        is_approved: new.is_approved,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap() + chrono::Duration::minutes(id),
    }
}

pub fn project(id: i64, is_popular: bool) -> Project {
    project_from(
        id,
        NewProject {
            title: format!("Project {id}"),
            description: Some("Face recognition attendance".into()),
            category: "aiml".into(),
            year_type: "major".into(),
            price: Decimal::new(299900, 2),
            features: Some("Source code, Report".into()),
            is_popular,
        },
    )
}

pub fn project_from(id: i64, new: NewProject) -> Project {
    Project {
        id,
        title: new.title,
        description: new.description,
        category: new.category,
        year_type: new.year_type,
        price: new.price,
        features: new.features,
        is_popular: new.is_popular,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap() + chrono::Duration::minutes(id),
    }
}
