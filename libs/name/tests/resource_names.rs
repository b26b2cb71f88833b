//! Integration tests for the resource-name facades.
//!
//! These tests run the lifecycle a service handler would:
//! 1. Mint a name for a newly created resource
//! 2. Validate and parse names received over the wire
//! 3. Derive the parent name for store-scoped lookups
//!
//! Ids travel through JSON the way API payloads carry them.

use mrkt_name::{
    Bindings, MembershipNames, NameError, PaymentNames, ProductNames, PurchaseNames, ResourceId,
    StoreNames, UserNames,
};
use serde::{Deserialize, Serialize};

const STORE_NAME: &str = "stores/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15";
const PRODUCT_NAME: &str =
    "stores/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15/products/90e3eaaa-4d9c-423f-b468-bb7322fb5d4f";

#[test]
fn test_store_product_lifecycle() {
    let store_name = StoreNames::generate();
    StoreNames::validate(&store_name).unwrap();
    let store = StoreNames::parse(&store_name).unwrap();

    let product_name = ProductNames::generate(&store).unwrap();
    ProductNames::validate(&product_name).unwrap();

    let product = ProductNames::parse(&product_name).unwrap();
    assert_eq!(product.get("store"), store.get("store"));

    let parent = ProductNames::parent(&product_name).unwrap();
    assert_eq!(parent, store_name);
    StoreNames::validate(&parent).unwrap();
}

#[test]
fn test_known_product_name_destructures() {
    let bindings = ProductNames::parse(PRODUCT_NAME).unwrap();
    assert_eq!(
        bindings.get("store").unwrap().to_string(),
        "6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15"
    );
    assert_eq!(
        bindings.get("product").unwrap().to_string(),
        "90e3eaaa-4d9c-423f-b468-bb7322fb5d4f"
    );
    assert_eq!(ProductNames::parent(PRODUCT_NAME).unwrap(), STORE_NAME);
    StoreNames::validate(STORE_NAME).unwrap();
}

#[test]
fn test_every_nested_type_derives_its_store() {
    let store_name = StoreNames::generate();
    let store = StoreNames::parse(&store_name).unwrap();

    let product = ProductNames::generate(&store).unwrap();
    let membership = MembershipNames::generate(&store).unwrap();
    let payment = PaymentNames::generate(&store).unwrap();
    let purchase = PurchaseNames::generate(&store).unwrap();

    assert_eq!(ProductNames::parent(&product).unwrap(), store_name);
    assert_eq!(MembershipNames::parent(&membership).unwrap(), store_name);
    assert_eq!(PaymentNames::parent(&payment).unwrap(), store_name);
    assert_eq!(PurchaseNames::parent(&purchase).unwrap(), store_name);
}

#[test]
fn test_wire_payload_roundtrip() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ProductRecord {
        name: String,
        store: ResourceId,
        product: ResourceId,
    }

    let bindings = ProductNames::parse(PRODUCT_NAME).unwrap();
    let record = ProductRecord {
        name: PRODUCT_NAME.to_string(),
        store: bindings.get("store").unwrap(),
        product: bindings.get("product").unwrap(),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15"));
    let decoded: ProductRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);

    // Tampered ids fail deserialization instead of parsing loosely.
    let tampered = json.replace("90e3eaaa", "90E3EAAA");
    assert!(serde_json::from_str::<ProductRecord>(&tampered).is_err());
}

#[test]
fn test_invalid_wire_names_are_not_defects() {
    let cases = [
        "",
        "stores",
        "stores/not-a-uuid",
        "stores/6729F7FA-DC5A-41AE-B00D-5CD67D5E1E15",
        "shops/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15",
        "stores/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15/products",
    ];

    for name in cases {
        let err = StoreNames::validate(name).unwrap_err();
        assert!(!err.is_defect(), "{name}: {err}");
    }
}

#[test]
fn test_incomplete_bindings_are_a_defect() {
    let err = ProductNames::generate(&Bindings::new()).unwrap_err();
    assert_eq!(err, NameError::MissingBinding("store".to_string()));
    assert!(err.is_defect());
}

#[test]
fn test_user_names_stay_disjoint_from_store_names() {
    let user_name = UserNames::generate();
    assert!(StoreNames::validate(&user_name).is_err());
    assert!(matches!(
        ProductNames::validate(&user_name).unwrap_err(),
        NameError::LengthMismatch { .. }
    ));
}

#[test]
fn test_formats_are_shared_across_threads() {
    let store_name = StoreNames::generate();
    let store = StoreNames::parse(&store_name).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                let name = ProductNames::generate(&store).unwrap();
                ProductNames::validate(&name).unwrap();
                ProductNames::parent(&name).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), store_name);
    }

    // The compiled format is one process-wide instance.
    assert!(std::ptr::eq(ProductNames::format(), ProductNames::format()));
}
