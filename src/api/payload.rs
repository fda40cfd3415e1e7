use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::model::{NewProduct, ProductChanges};

pub const INVALID_PRICE_MESSAGE: &str = "Price has to be a valid number";

/// Request body of create and update calls.
///
/// Each field is `None` when the key is absent and `Some(..)` when present,
/// even if the value is `null`.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ProductPayload {
    /// Decode a raw request body. Anything that is not a JSON object with
    /// correctly shaped fields is an internal error.
    pub fn parse(body: &[u8], context: &'static str) -> Result<Self, ApiError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ApiError::internal(context, e))?;
        if !value.is_object() {
            return Err(ApiError::internal(
                context,
                anyhow::anyhow!("request body is not a JSON object"),
            ));
        }
        serde_json::from_value(value).map_err(|e| ApiError::internal(context, e))
    }

    /// A new product needs a numeric price
    pub fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let price = match self.price {
            Some(value) => numeric_price(&value)?,
            None => return Err(ApiError::Validation(INVALID_PRICE_MESSAGE)),
        };
        Ok(NewProduct::new(
            self.title.flatten(),
            self.description.flatten(),
            price,
        ))
    }

    /// Changes may leave the price out, but a supplied price must be numeric
    pub fn into_changes(self) -> Result<ProductChanges, ApiError> {
        let price = self.price.as_ref().map(numeric_price).transpose()?;
        Ok(ProductChanges {
            title: self.title,
            description: self.description,
            price,
        })
    }
}

fn numeric_price(value: &Value) -> Result<f64, ApiError> {
    value
        .as_f64()
        .ok_or(ApiError::Validation(INVALID_PRICE_MESSAGE))
}
