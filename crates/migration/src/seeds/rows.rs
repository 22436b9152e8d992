//! CSV record shapes for the Olist exports.
//!
//! Column headers match the entity field names, so records deserialize by
//! name. Decimals are read as text and parsed exactly; timestamps use the
//! dataset's `%Y-%m-%d %H:%M:%S` format.

use std::str::FromStr;

use ::error::AppError;
use chrono::NaiveDateTime;
use entity::{order_items, payments, products, reviews};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, Set};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

/// Timestamp format used throughout the exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A CSV record that converts into an insertable active model.
pub trait SeedRow: DeserializeOwned + Send {
    /// The active model inserted for this record
    type Active: ActiveModelTrait + ActiveModelBehavior + Send + 'static;

    /// Converts the record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a field cannot be converted.
    fn into_active(self) -> Result<Self::Active, AppError>;
}

fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw.trim()).map_err(|e| AppError::validation(format!("{}: invalid decimal `{}`: {}", field, raw, e)))
}

fn required_text(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{}: must not be empty", field)));
    }
    Ok(value)
}

/// `olist_products_dataset.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub product_id:                 String,
    pub product_category_name:      String,
    pub product_name_lenght:        i32,
    pub product_description_lenght: i32,
    pub product_photos_qty:         i32,
    pub product_weight_g:           i32,
    pub product_length_cm:          i32,
    pub product_height_cm:          i32,
    pub product_width_cm:           i32,
}

impl SeedRow for ProductRow {
    type Active = products::ActiveModel;

    fn into_active(self) -> Result<Self::Active, AppError> {
        Ok(products::ActiveModel {
            product_id:                 Set(required_text("product_id", self.product_id)?),
            product_category_name:      Set(required_text(
                "product_category_name",
                self.product_category_name,
            )?),
            product_name_lenght:        Set(self.product_name_lenght),
            product_description_lenght: Set(self.product_description_lenght),
            product_photos_qty:         Set(self.product_photos_qty),
            product_weight_g:           Set(self.product_weight_g),
            product_length_cm:          Set(self.product_length_cm),
            product_height_cm:          Set(self.product_height_cm),
            product_width_cm:           Set(self.product_width_cm),
        })
    }
}

/// `olist_order_reviews_dataset.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub review_id:               String,
    pub order_id:                String,
    pub review_score:            i32,
    #[serde(default, deserialize_with = "optional_text")]
    pub review_comment_title:    Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub review_comment_message:  Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub review_creation_date:    NaiveDateTime,
    #[serde(deserialize_with = "timestamp")]
    pub review_answer_timestamp: NaiveDateTime,
}

impl SeedRow for ReviewRow {
    type Active = reviews::ActiveModel;

    fn into_active(self) -> Result<Self::Active, AppError> {
        Ok(reviews::ActiveModel {
            review_id:               Set(required_text("review_id", self.review_id)?),
            order_id:                Set(required_text("order_id", self.order_id)?),
            review_score:            Set(self.review_score),
            review_comment_title:    Set(self.review_comment_title),
            review_comment_message:  Set(self.review_comment_message),
            review_creation_date:    Set(self.review_creation_date),
            review_answer_timestamp: Set(self.review_answer_timestamp),
        })
    }
}

/// `olist_order_payments_dataset.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRow {
    pub order_id:             String,
    pub payment_sequential:   i32,
    pub payment_type:         String,
    pub payment_installments: i32,
    pub payment_value:        String,
}

impl SeedRow for PaymentRow {
    type Active = payments::ActiveModel;

    fn into_active(self) -> Result<Self::Active, AppError> {
        Ok(payments::ActiveModel {
            order_id:             Set(required_text("order_id", self.order_id)?),
            payment_sequential:   Set(self.payment_sequential),
            payment_type:         Set(required_text("payment_type", self.payment_type)?),
            payment_installments: Set(self.payment_installments),
            payment_value:        Set(parse_decimal("payment_value", &self.payment_value)?),
        })
    }
}

/// `olist_order_items_dataset.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRow {
    pub order_id:            String,
    pub order_item_id:       i32,
    pub product_id:          String,
    pub seller_id:           String,
    #[serde(deserialize_with = "timestamp")]
    pub shipping_limit_date: NaiveDateTime,
    pub price:               String,
    pub freight_value:       String,
}

impl SeedRow for OrderItemRow {
    type Active = order_items::ActiveModel;

    fn into_active(self) -> Result<Self::Active, AppError> {
        Ok(order_items::ActiveModel {
            order_item_id:       Set(self.order_item_id),
            order_id:            Set(required_text("order_id", self.order_id)?),
            product_id:          Set(required_text("product_id", self.product_id)?),
            seller_id:           Set(required_text("seller_id", self.seller_id)?),
            shipping_limit_date: Set(self.shipping_limit_date),
            price:               Set(parse_decimal("price", &self.price)?),
            freight_value:       Set(parse_decimal("freight_value", &self.freight_value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue;

    use super::*;

    fn read<R: DeserializeOwned>(data: &str) -> Vec<Result<R, csv::Error>> {
        csv::Reader::from_reader(data.as_bytes()).deserialize().collect()
    }

    #[test]
    fn test_review_row_blank_comments_become_none() {
        let rows = read::<ReviewRow>(
            "review_id,order_id,review_score,review_comment_title,review_comment_message,review_creation_date,\
             review_answer_timestamp\n\
             r1,o1,5,,   ,2018-01-18 00:00:00,2018-01-18 21:46:59\n",
        );
        let row = rows.into_iter().next().unwrap().unwrap();

        assert_eq!(row.review_comment_title, None);
        assert_eq!(row.review_comment_message, None);
        assert_eq!(
            row.review_answer_timestamp,
            NaiveDateTime::parse_from_str("2018-01-18 21:46:59", TIMESTAMP_FORMAT).unwrap()
        );
    }

    #[test]
    fn test_review_row_rejects_bad_timestamp() {
        let rows = read::<ReviewRow>(
            "review_id,order_id,review_score,review_comment_title,review_comment_message,review_creation_date,\
             review_answer_timestamp\n\
             r1,o1,5,,,18/01/2018,2018-01-18 21:46:59\n",
        );
        assert!(rows[0].is_err());
    }

    #[test]
    fn test_payment_row_exact_decimal() {
        let rows = read::<PaymentRow>(
            "order_id,payment_sequential,payment_type,payment_installments,payment_value\no1,1,credit_card,8,99.33\n",
        );
        let active = rows.into_iter().next().unwrap().unwrap().into_active().unwrap();

        assert_eq!(
            active.payment_value,
            ActiveValue::Set(Decimal::from_str("99.33").unwrap())
        );
    }

    #[test]
    fn test_payment_row_invalid_decimal() {
        let row = PaymentRow {
            order_id:             "o1".to_string(),
            payment_sequential:   1,
            payment_type:         "boleto".to_string(),
            payment_installments: 1,
            payment_value:        "ten".to_string(),
        };
        let err = row.into_active().unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.message().contains("payment_value"));
    }

    #[test]
    fn test_product_row_missing_measure_fails_to_parse() {
        let rows = read::<ProductRow>(
            "product_id,product_category_name,product_name_lenght,product_description_lenght,product_photos_qty,\
             product_weight_g,product_length_cm,product_height_cm,product_width_cm\n\
             p1,perfumaria,40,287,1,,16,10,14\n",
        );
        assert!(rows[0].is_err());
    }

    #[test]
    fn test_product_row_empty_category_rejected() {
        let row = ProductRow {
            product_id:                 "p1".to_string(),
            product_category_name:      " ".to_string(),
            product_name_lenght:        1,
            product_description_lenght: 1,
            product_photos_qty:         1,
            product_weight_g:           1,
            product_length_cm:          1,
            product_height_cm:          1,
            product_width_cm:           1,
        };
        assert!(row.into_active().is_err());
    }

    #[test]
    fn test_order_item_row_columns_in_export_order() {
        let rows = read::<OrderItemRow>(
            "order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value\n\
             o1,1,p1,s1,2017-09-19 09:45:35,58.90,13.29\n",
        );
        let active = rows.into_iter().next().unwrap().unwrap().into_active().unwrap();

        assert_eq!(active.order_item_id, ActiveValue::Set(1));
        assert_eq!(active.seller_id, ActiveValue::Set("s1".to_string()));
        assert_eq!(
            active.freight_value,
            ActiveValue::Set(Decimal::from_str("13.29").unwrap())
        );
    }
}
