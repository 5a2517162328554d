//! Parsing of untrusted input records.

use crate::error::ValidationError;
use crate::restaurant::{Restaurant, RestaurantDetails};
use crate::slug::slugify;
use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one element of the input array. Every field is optional here
/// so that absence is reported by name instead of as a serde error.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawRestaurant {
    name: Option<String>,
    slug: Option<String>,
    #[serde(alias = "imageUrl")]
    cover_image_url: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    #[serde(alias = "zip")]
    zip_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    phone: Option<String>,
    website: Option<String>,
    place_id: Option<String>,
    cuisine_types: Option<Vec<String>>,
    price_level: Option<i64>,
    hours: Option<Value>,
}

/// Validate one element of the input array.
pub fn parse_record(value: &Value) -> Result<Restaurant, ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::NotAnObject);
    }

    let raw = RawRestaurant::deserialize(value)?;

    let name = required(raw.name, "name")?;
    let place_id = required(raw.place_id, "placeId")?;
    let address = required(raw.address, "address")?;
    let city = required(raw.city, "city")?;
    let state = required(raw.state, "state")?;
    let zip_code = required(raw.zip_code, "zipCode")?;

    let latitude = raw
        .latitude
        .ok_or(ValidationError::MissingField("latitude"))?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::Latitude(latitude));
    }
    let longitude = raw
        .longitude
        .ok_or(ValidationError::MissingField("longitude"))?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::Longitude(longitude));
    }

    let price_level = match raw.price_level {
        Some(level) if (0..=4).contains(&level) => Some(level as i16),
        Some(level) => return Err(ValidationError::PriceLevel(level)),
        None => None,
    };

    let hours = match raw.hours {
        Some(hours @ (Value::Object(_) | Value::Array(_))) => Some(hours),
        Some(_) => return Err(ValidationError::HoursShape),
        None => None,
    };

    let slug = match optional(raw.slug) {
        Some(slug) => slug,
        None => {
            let derived = slugify(&name);
            if derived.is_empty() {
                return Err(ValidationError::EmptySlug(name));
            }
            derived
        }
    };

    Ok(Restaurant {
        place_id,
        slug,
        details: RestaurantDetails {
            name,
            cover_image_url: optional(raw.cover_image_url),
            address,
            city,
            state,
            zip_code,
            latitude,
            longitude,
            phone: optional(raw.phone),
            website: optional(raw.website),
            cuisine_types: normalize_tags(raw.cuisine_types.unwrap_or_default()),
            price_level,
            hours,
        },
    })
}

/// Human-readable label for a record in log lines, even when it failed to parse.
pub fn record_label(value: &Value, index: usize) -> String {
    value
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("<record {index}>"))
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Joe's Diner",
            "slug": "joes-diner",
            "coverImageUrl": "https://img.example.com/joes.jpg",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zipCode": "62701",
            "latitude": 39.7817,
            "longitude": -89.6501,
            "phone": "(217) 555-0100",
            "website": null,
            "placeId": "ChIJ-joes",
            "cuisineTypes": ["american", "breakfast"],
            "priceLevel": 2,
            "hours": { "monday": "7:00 AM - 3:00 PM" },
            "rating": 4.5
        })
    }

    #[test]
    fn test_parse_valid_record() {
        let restaurant = parse_record(&valid()).unwrap();

        assert_eq!(restaurant.place_id, "ChIJ-joes");
        assert_eq!(restaurant.slug, "joes-diner");
        assert_eq!(restaurant.details.name, "Joe's Diner");
        assert_eq!(
            restaurant.details.cover_image_url.as_deref(),
            Some("https://img.example.com/joes.jpg")
        );
        assert_eq!(restaurant.details.zip_code, "62701");
        assert_eq!(restaurant.details.website, None);
        assert_eq!(restaurant.details.cuisine_types, vec!["american", "breakfast"]);
        assert_eq!(restaurant.details.price_level, Some(2));
        assert_eq!(
            restaurant.details.hours,
            Some(json!({ "monday": "7:00 AM - 3:00 PM" }))
        );
    }

    #[test]
    fn test_aliases_are_accepted() {
        let mut value = valid();
        let obj = value.as_object_mut().unwrap();
        obj.remove("coverImageUrl");
        obj.remove("zipCode");
        obj.insert("imageUrl".into(), json!("https://img.example.com/a.jpg"));
        obj.insert("zip".into(), json!("62702"));

        let restaurant = parse_record(&value).unwrap();
        assert_eq!(
            restaurant.details.cover_image_url.as_deref(),
            Some("https://img.example.com/a.jpg")
        );
        assert_eq!(restaurant.details.zip_code, "62702");
    }

    #[test]
    fn test_missing_place_id() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("placeId");

        let err = parse_record(&value).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("placeId")));
    }

    #[test]
    fn test_blank_name() {
        let mut value = valid();
        value["name"] = json!("   ");

        let err = parse_record(&value).unwrap_err();
        assert!(matches!(err, ValidationError::BlankField("name")));
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let mut value = valid();
        value["latitude"] = json!("north");

        let err = parse_record(&value).unwrap_err();
        assert!(matches!(err, ValidationError::Decode(_)));
    }

    #[test]
    fn test_out_of_range_values() {
        let mut value = valid();
        value["latitude"] = json!(91.0);
        assert!(matches!(
            parse_record(&value).unwrap_err(),
            ValidationError::Latitude(_)
        ));

        let mut value = valid();
        value["longitude"] = json!(-181.0);
        assert!(matches!(
            parse_record(&value).unwrap_err(),
            ValidationError::Longitude(_)
        ));

        let mut value = valid();
        value["priceLevel"] = json!(5);
        assert!(matches!(
            parse_record(&value).unwrap_err(),
            ValidationError::PriceLevel(5)
        ));
    }

    #[test]
    fn test_scalar_hours_rejected() {
        let mut value = valid();
        value["hours"] = json!("always open");

        let err = parse_record(&value).unwrap_err();
        assert!(matches!(err, ValidationError::HoursShape));
    }

    #[test]
    fn test_slug_derived_from_name() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("slug");

        let restaurant = parse_record(&value).unwrap();
        assert_eq!(restaurant.slug, "joe-s-diner");

        value["name"] = json!("!!!");
        let err = parse_record(&value).unwrap_err();
        assert!(matches!(err, ValidationError::EmptySlug(_)));
    }

    #[test]
    fn test_cuisine_tags_normalized() {
        let mut value = valid();
        value["cuisineTypes"] = json!([" thai ", "", "thai", "noodles"]);

        let restaurant = parse_record(&value).unwrap();
        assert_eq!(restaurant.details.cuisine_types, vec!["thai", "noodles"]);
    }

    #[test]
    fn test_not_an_object() {
        let err = parse_record(&json!(["not", "a", "record"])).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnObject));
    }

    #[test]
    fn test_record_label() {
        assert_eq!(record_label(&valid(), 0), "Joe's Diner");
        assert_eq!(record_label(&json!({ "name": " " }), 3), "<record 3>");
        assert_eq!(record_label(&json!(42), 7), "<record 7>");
    }
}
