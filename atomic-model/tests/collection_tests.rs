use atomic_model::CollectionDoc;
use atomic_types::{Network, RawRecord};
use pretty_assertions::assert_eq;
use serde_json::json;

fn decoded_collection() -> RawRecord {
    RawRecord::from_value(json!({
        "collection_name": "earlyibmfans",
        "author": "earlyibmfans",
        "allow_notify": 1,
        "authorized_accounts": ["earlyibmfans", "atomhubtools"],
        "notify_accounts": [],
        "market_fee": "0.05000000000000000",
        "name": "IBM PC NFT Experience",
        "img": "QmaTT6bZeUhxVE1f9JRnD5yDxqeCQjaDFZ9aqrnE93Bjap",
        "images": r#"{"logo_512x512": "Qmlogo"}"#,
        "socials": r#"{"twitter": "ibmpc"}"#,
        "creator_info": r#"{"company": "IBM"}"#,
        "data": {
            "name": "IBM PC NFT Experience",
            "description": "Launched August 12.",
            "images": {"logo_512x512": "Qmlogo"},
            "socials": {"twitter": "ibmpc"},
            "creator_info": {"company": "IBM"},
        },
    }))
    .unwrap()
}

// ── Field mapping ───────────────────────────────────────────────

#[test]
fn builds_from_a_decoded_record() {
    let doc = CollectionDoc::from_record(&decoded_collection(), Network::Wax);

    assert_eq!(doc.collection_name, "earlyibmfans");
    assert_eq!(doc.name, "IBM PC NFT Experience");
    assert_eq!(doc.market_fee, "0.05000000000000000");
    assert_eq!(doc.author, "earlyibmfans");
    assert!(doc.allow_notify);
    assert_eq!(doc.authorized_accounts, vec!["earlyibmfans", "atomhubtools"]);
    assert!(doc.notify_accounts.is_empty());
    assert_eq!(doc.network, Network::Wax);
    // description comes from the decoded data sub-object.
    assert_eq!(doc.description, "Launched August 12.");
    // Top-level text fields stay text; data carries the parsed forms.
    assert_eq!(doc.images, r#"{"logo_512x512": "Qmlogo"}"#);
    assert!(doc.data["images"].is_object());
}

#[test]
fn absent_fields_degrade_to_empty_values() {
    let doc = CollectionDoc::from_record(&RawRecord::new(), Network::Eos);

    assert_eq!(doc.collection_name, "");
    assert_eq!(doc.description, "");
    assert!(!doc.allow_notify);
    assert!(doc.authorized_accounts.is_empty());
    assert_eq!(doc.data, json!({}));
    assert_eq!(doc.contract, None);
    assert_eq!(doc.created_at_time, None);
}

// ── unique_id ───────────────────────────────────────────────────

#[test]
fn unique_id_joins_network_kind_and_name() {
    let doc = CollectionDoc::from_record(&decoded_collection(), Network::Wax);
    assert_eq!(doc.unique_id(), "wax-collection-earlyibmfans");
}

#[test]
fn unique_id_is_stable_across_calls_and_equal_records() {
    let a = CollectionDoc::from_record(&decoded_collection(), Network::Proton);
    let b = CollectionDoc::from_record(&decoded_collection(), Network::Proton);
    assert_eq!(a.unique_id(), a.unique_id());
    assert_eq!(a.unique_id(), b.unique_id());
    assert_eq!(a.unique_id(), "proton-collection-earlyibmfans");
}
