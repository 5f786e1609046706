pub mod health_assessment;
pub mod medicine_advisor;
pub mod mental_health;
pub mod symptom_checker;
