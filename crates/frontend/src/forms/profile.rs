use chrono::{Datelike, NaiveDate};
use contracts::auth::{UpdateUserRequest, UserData};

use super::{optional, require, Rejection};

/// Editable copy of the signed-in user's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub pet_star: String,
    pub user_photo: String,
    pub breed: String,
    pub birth_date: String,
    pub hobbies: String,
}

impl From<&UserData> for ProfileForm {
    fn from(user: &UserData) -> Self {
        Self {
            pet_star: user.pet_star.clone(),
            user_photo: user.user_photo.clone().unwrap_or_default(),
            breed: user.breed.clone().unwrap_or_default(),
            birth_date: user.birth_date.clone().unwrap_or_default(),
            hobbies: user.hobbies.clone().unwrap_or_default(),
        }
    }
}

impl ProfileForm {
    /// Blank optional fields are left out so the backend keeps their values.
    pub fn validate(&self) -> Result<UpdateUserRequest, Rejection> {
        let birth_date = optional(&self.birth_date);
        if let Some(date) = &birth_date {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| Rejection::Missing("A birth date in YYYY-MM-DD form"))?;
        }

        Ok(UpdateUserRequest {
            pet_star: Some(require(&self.pet_star, "PetStar name")?),
            user_photo: optional(&self.user_photo),
            breed: optional(&self.breed),
            birth_date,
            hobbies: optional(&self.hobbies),
        })
    }
}

/// Human readable age of a pet born on `birth_date` (`YYYY-MM-DD`).
pub fn pet_age(birth_date: &str, today: NaiveDate) -> Option<String> {
    let born = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").ok()?;
    if born > today {
        return None;
    }

    let mut months = (today.year() - born.year()) * 12 + today.month() as i32 - born.month() as i32;
    if today.day() < born.day() {
        months -= 1;
    }

    let (years, months) = (months / 12, months % 12);
    let text = match (years, months) {
        (0, 0) => "less than a month".to_string(),
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{}, {}", plural(y, "year"), plural(m, "month")),
    };
    Some(text)
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pet_age_in_years_and_months() {
        let today = day(2024, 6, 15);
        assert_eq!(pet_age("2022-03-10", today).as_deref(), Some("2 years, 3 months"));
        assert_eq!(pet_age("2023-06-15", today).as_deref(), Some("1 year"));
        assert_eq!(pet_age("2024-05-20", today).as_deref(), Some("less than a month"));
        assert_eq!(pet_age("2024-04-01", today).as_deref(), Some("2 months"));
    }

    #[test]
    fn pet_age_rejects_future_and_garbage() {
        let today = day(2024, 6, 15);
        assert_eq!(pet_age("2025-01-01", today), None);
        assert_eq!(pet_age("yesterday", today), None);
    }

    #[test]
    fn profile_update_skips_blank_fields() {
        let user = UserData {
            id: Some(1),
            email: "a@b.com".into(),
            pet_star: "Rex".into(),
            user_photo: None,
            breed: Some("Beagle".into()),
            birth_date: None,
            hobbies: None,
        };
        let request = ProfileForm::from(&user).validate().unwrap();
        assert_eq!(request.pet_star.as_deref(), Some("Rex"));
        assert_eq!(request.breed.as_deref(), Some("Beagle"));
        assert_eq!(request.user_photo, None);
        assert_eq!(request.birth_date, None);
    }

    #[test]
    fn profile_update_checks_birth_date_format() {
        let form = ProfileForm {
            pet_star: "Rex".into(),
            birth_date: "15/06/2020".into(),
            ..ProfileForm::default()
        };
        assert!(form.validate().is_err());
    }
}
