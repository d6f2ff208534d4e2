mod error;
pub mod pages;
mod utility_contexts;

use num_format::{Locale, ToFormattedString};
use rocket::routes;
use rocket_dyn_templates::Template;
use rocket_dyn_templates::tera::Value;
use std::collections::HashMap;

struct NumFormat;

impl rocket_dyn_templates::tera::Filter for NumFormat {
    fn filter(
        &self,
        value: &Value,
        _args: &HashMap<String, Value>,
    ) -> rocket_dyn_templates::tera::Result<Value> {
        if let Value::Number(num) = value {
            if let Some(n) = num.as_i64() {
                return Ok(n.to_formatted_string(&Locale::en).into());
            }
        }

        Ok(value.clone())
    }
}

/// The template engine with the dashboard's tera filters registered.
pub fn template_fairing() -> impl rocket::fairing::Fairing {
    Template::custom(|engines| {
        engines.tera.register_filter("num_format", NumFormat);
    })
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        pages::index_page,
        pages::team_page,
        pages::h2h_page,
        pages::batter_page,
        pages::bowler_page,
        pages::season_page,
    ]
}
