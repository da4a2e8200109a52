use crate::domain::schema::{FieldDef, Schema, ValueKind};
use crate::models::entity::ENTITY;
use chrono::NaiveDate;
use uuid::Uuid;

pub static SALES_ORDER_LINE: Schema = Schema {
    name: "salesOrderLine",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("accountId", ValueKind::Uuid),
        FieldDef::scalar("amountExcludingTax", ValueKind::Float64),
        FieldDef::scalar("amountIncludingTax", ValueKind::Float64),
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("discountAmount", ValueKind::Float64),
        FieldDef::scalar("discountAppliedBeforeTax", ValueKind::Bool),
        FieldDef::scalar("discountPercent", ValueKind::Float64),
        FieldDef::scalar("documentId", ValueKind::Uuid),
        FieldDef::scalar("invoiceDiscountAllocation", ValueKind::Float64),
        FieldDef::scalar("invoicedQuantity", ValueKind::Float64),
        FieldDef::scalar("invoiceQuantity", ValueKind::Float64),
        FieldDef::scalar("itemId", ValueKind::Uuid),
        FieldDef::scalar("lineType", ValueKind::String),
        FieldDef::scalar("netAmount", ValueKind::Float64),
        FieldDef::scalar("netAmountIncludingTax", ValueKind::Float64),
        FieldDef::scalar("netTaxAmount", ValueKind::Float64),
        FieldDef::scalar("quantity", ValueKind::Float64),
        FieldDef::scalar("sequence", ValueKind::Int32),
        FieldDef::scalar("shipmentDate", ValueKind::Date),
        FieldDef::scalar("shippedQuantity", ValueKind::Float64),
        FieldDef::scalar("shipQuantity", ValueKind::Float64),
        FieldDef::scalar("taxCode", ValueKind::String),
        FieldDef::scalar("taxPercent", ValueKind::Float64),
        FieldDef::scalar("totalTaxAmount", ValueKind::Float64),
        FieldDef::scalar("unitOfMeasureId", ValueKind::Uuid),
        FieldDef::scalar("unitPrice", ValueKind::Float64),
    ],
    subtypes: &[],
};

model! {
    pub struct SalesOrderLine => SALES_ORDER_LINE;
}

impl SalesOrderLine {
    pub fn document_id(&self) -> Option<Uuid> {
        self.get_uuid("documentId")
    }

    pub fn item_id(&self) -> Option<Uuid> {
        self.get_uuid("itemId")
    }

    pub fn shipment_date(&self) -> Option<NaiveDate> {
        self.get_date("shipmentDate")
    }

    pub fn quantity(&self) -> Option<f64> {
        self.get_f64("quantity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_model, encode_json_value, WriterOptions};
    use serde_json::json;

    #[test]
    fn test_uuid_and_date_fields() {
        let payload = json!({
            "id": "line-1",
            "documentId": "4f1b0c1e-7b5e-4c2a-9b1d-3f6f1c2e8a90",
            "itemId": "00000000-0000-0000-0000-000000000001",
            "sequence": 10000,
            "shipmentDate": "2024-02-29",
            "quantity": 3.0,
            "unitPrice": 12.5
        });
        let line: SalesOrderLine = decode_model(&payload.to_string()).unwrap();

        assert_eq!(
            line.document_id(),
            Some(Uuid::parse_str("4f1b0c1e-7b5e-4c2a-9b1d-3f6f1c2e8a90").unwrap())
        );
        assert_eq!(line.shipment_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(line.quantity(), Some(3.0));

        let encoded = encode_json_value(&line, WriterOptions::default()).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_bad_uuid_is_rejected() {
        let payload = json!({"accountId": "not-a-uuid"});
        assert!(decode_model::<SalesOrderLine>(&payload.to_string()).is_err());
    }
}
