//! Persisted item records - the storage boundary format.
//!
//! Carts persisted by earlier storefront builds use PascalCase field names
//! (`Id`, `Name`, `Images.PrimaryMedium`, `Colors[].ColorName`, `FinalPrice`,
//! `ListPrice`) and two quantity spellings (`Quantity` and the legacy `Qtd`).
//! [`ItemRecord`] matches that shape exactly for interop with existing data;
//! everything inside the engine uses the normalized [`LineItem`].
//!
//! Normalization rules:
//! - unit price = `FinalPrice`, falling back to `ListPrice` in legacy data
//! - quantity defaults to 1 when absent and is clamped to at least 1
//! - on save both price fields are written equal to the unit price, so any
//!   reader sees a consistent per-unit price

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::item::LineItem;

/// Product image references as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImages {
    /// Medium-resolution primary image.
    #[serde(rename = "PrimaryMedium", default)]
    pub primary_medium: String,
}

/// A selectable product color as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemColor {
    /// Display name of the color.
    #[serde(rename = "ColorName")]
    pub color_name: String,
}

/// One cart/wishlist entry in its persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Images", default)]
    pub images: ItemImages,

    #[serde(rename = "Colors", default)]
    pub colors: Vec<ItemColor>,

    /// Per-unit sale price.
    #[serde(
        rename = "FinalPrice",
        with = "rust_decimal::serde::float_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub final_price: Option<Decimal>,

    /// Per-unit list price; legacy readers compute subtotals from this.
    #[serde(
        rename = "ListPrice",
        with = "rust_decimal::serde::float_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_price: Option<Decimal>,

    /// Unit count; older records spell this `Qtd` or omit it entirely.
    #[serde(rename = "Quantity", alias = "Qtd", default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl From<ItemRecord> for LineItem {
    fn from(record: ItemRecord) -> Self {
        let unit_price = record
            .final_price
            .or(record.list_price)
            .unwrap_or(Decimal::ZERO);
        Self {
            id: ProductId::new(record.id),
            name: record.name,
            unit_price,
            quantity: record.quantity.max(1),
            color_label: record.colors.into_iter().next().map(|c| c.color_name),
            image_ref: record.images.primary_medium,
        }
    }
}

impl From<&LineItem> for ItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_owned(),
            name: item.name.clone(),
            images: ItemImages {
                primary_medium: item.image_ref.clone(),
            },
            colors: item
                .color_label
                .as_ref()
                .map(|color| ItemColor {
                    color_name: color.clone(),
                })
                .into_iter()
                .collect(),
            final_price: Some(item.unit_price),
            list_price: Some(item.unit_price),
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> LineItem {
        LineItem::new("880RR", "Ajax Tent", Decimal::new(19999, 2), 2)
            .unwrap()
            .with_color("Pumpkin")
            .with_image("images/tents/880RR.jpg")
    }

    #[test]
    fn test_line_item_record_round_trip() {
        let original = item();
        let record = ItemRecord::from(&original);
        assert_eq!(LineItem::from(record), original);
    }

    #[test]
    fn test_record_field_names_match_persisted_layout() {
        let json = serde_json::to_value(ItemRecord::from(&item())).unwrap();
        assert_eq!(json["Id"], "880RR");
        assert_eq!(json["Name"], "Ajax Tent");
        assert_eq!(json["Images"]["PrimaryMedium"], "images/tents/880RR.jpg");
        assert_eq!(json["Colors"][0]["ColorName"], "Pumpkin");
        assert_eq!(json["FinalPrice"], 199.99);
        assert_eq!(json["ListPrice"], 199.99);
        assert_eq!(json["Quantity"], 2);
    }

    #[test]
    fn test_legacy_qtd_alias_and_list_price_fallback() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"Id":"985RF","Name":"Talus Tent","ListPrice":99.99,"Qtd":3}"#,
        )
        .unwrap();
        let item = LineItem::from(record);
        assert_eq!(item.unit_price, Decimal::new(9999, 2));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.color_label, None);
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"Id":"A","Name":"Pad","FinalPrice":20.0}"#).unwrap();
        assert_eq!(record.quantity, 1);
    }

    #[test]
    fn test_zero_quantity_record_clamps_to_one() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"Id":"A","Name":"Pad","FinalPrice":20.0,"Quantity":0}"#)
                .unwrap();
        assert_eq!(LineItem::from(record).quantity, 1);
    }

    #[test]
    fn test_final_price_preferred_over_list_price() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"Id":"A","Name":"Pad","FinalPrice":15.5,"ListPrice":20.0}"#,
        )
        .unwrap();
        assert_eq!(LineItem::from(record).unit_price, Decimal::new(155, 1));
    }
}
