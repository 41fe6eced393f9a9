use std::ops::RangeInclusive;

use fastrand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{BusinessReport, BusinessSubject},
    services::templates::{self, REGENERATED_HEADLINES, REPORT_HEADLINES},
};

pub const RATING_MIN: f64 = 3.8;
pub const RATING_MAX: f64 = 4.9;
pub const REVIEWS: RangeInclusive<u32> = 50..=499;

/// Uniform in [3.8, 4.9], rounded to one decimal place.
pub fn sample_rating(rng: &mut Rng) -> f64 {
    let raw = rng.f64() * (RATING_MAX - RATING_MIN) + RATING_MIN;
    (raw * 10.0).round() / 10.0
}

pub fn sample_reviews(rng: &mut Rng) -> u32 {
    rng.u32(REVIEWS)
}

pub fn pick_headline(
    rng: &mut Rng,
    templates: &[&str],
    subject: &BusinessSubject,
) -> AppResult<String> {
    let template = rng
        .choice(templates.iter())
        .ok_or_else(|| AppError::Internal("headline template list is empty".to_string()))?;

    Ok(templates::render(template, &subject.name, &subject.location))
}

pub fn generate_report(rng: &mut Rng, subject: &BusinessSubject) -> AppResult<BusinessReport> {
    Ok(BusinessReport {
        rating: sample_rating(rng),
        reviews: sample_reviews(rng),
        headline: pick_headline(rng, &REPORT_HEADLINES, subject)?,
    })
}

pub fn regenerate_headline(rng: &mut Rng, subject: &BusinessSubject) -> AppResult<String> {
    pick_headline(rng, &REGENERATED_HEADLINES, subject)
}
