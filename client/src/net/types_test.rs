use super::*;

// =============================================================
// Helpers
// =============================================================

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "$id": "u-1",
        "$createdAt": "2025-01-01T00:00:00.000+00:00",
        "accountId": "acc-1",
        "name": "Alice",
        "username": "alice",
        "email": "alice@example.com",
        "imageUrl": "https://cdn.test/avatar.png",
        "imageId": null,
        "bio": "hello",
        "posts": []
    })
}

fn make_post(likes: &[&str]) -> Post {
    Post {
        id: "p-1".to_owned(),
        created_at: String::new(),
        creator: UserSummary::default(),
        caption: "A caption".to_owned(),
        image_url: String::new(),
        image_id: "f-1".to_owned(),
        location: String::new(),
        tags: Vec::new(),
        likes: likes.iter().map(|id| DocumentRef { id: (*id).to_owned() }).collect(),
    }
}

// =============================================================
// Read models
// =============================================================

#[test]
fn user_deserializes_service_document() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.account_id, "acc-1");
    assert_eq!(user.image_id, None);
    assert_eq!(user.bio.as_deref(), Some("hello"));
}

#[test]
fn user_without_optional_fields_deserializes() {
    let mut value = user_json();
    let obj = value.as_object_mut().unwrap();
    obj.remove("imageId");
    obj.remove("bio");
    let user: User = serde_json::from_value(value).unwrap();
    assert_eq!(user.bio, None);
}

#[test]
fn session_from_user_copies_identity_fields() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    let session = Session::from(user);
    assert_eq!(session.id, "u-1");
    assert_eq!(session.username, "alice");
    assert_eq!(session.image_url, "https://cdn.test/avatar.png");
}

#[test]
fn post_deserializes_expanded_creator_and_likes() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "$id": "p-9",
        "$createdAt": "2025-02-02T10:00:00.000+00:00",
        "creator": user_json(),
        "caption": "Sunset",
        "imageUrl": "https://cdn.test/p.png",
        "imageId": "f-9",
        "location": "Lisbon",
        "tags": ["travel", "sea"],
        "likes": [user_json()]
    }))
    .unwrap();
    assert_eq!(post.creator.username, "alice");
    assert_eq!(post.tags, vec!["travel", "sea"]);
    assert!(post.is_liked_by("u-1"));
    assert!(!post.is_liked_by("u-2"));
}

#[test]
fn toggled_likes_adds_missing_user() {
    let post = make_post(&["u-1"]);
    assert_eq!(post.toggled_likes("u-2"), vec!["u-1", "u-2"]);
}

#[test]
fn toggled_likes_removes_present_user() {
    let post = make_post(&["u-1", "u-2"]);
    assert_eq!(post.toggled_likes("u-1"), vec!["u-2"]);
}

#[test]
fn document_list_deserializes_envelope() {
    let list: DocumentList<DocumentRef> =
        serde_json::from_value(serde_json::json!({ "total": 2, "documents": [{ "$id": "a" }, { "$id": "b" }] }))
            .unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.documents[1].id, "b");
}

// =============================================================
// Write payloads
// =============================================================

#[test]
fn new_post_document_serializes_camel_case() {
    let doc = NewPostDocument {
        creator: "u-1".to_owned(),
        caption: "Hi there".to_owned(),
        image_url: "https://cdn.test/x".to_owned(),
        image_id: "f-1".to_owned(),
        location: "Oslo".to_owned(),
        tags: vec!["a".to_owned()],
    };
    assert_eq!(
        serde_json::to_value(doc).unwrap(),
        serde_json::json!({
            "creator": "u-1",
            "caption": "Hi there",
            "imageUrl": "https://cdn.test/x",
            "imageId": "f-1",
            "location": "Oslo",
            "tags": ["a"]
        })
    );
}

#[test]
fn new_user_document_serializes_account_id() {
    let doc = NewUserDocument {
        account_id: "acc".to_owned(),
        name: "Bo".to_owned(),
        username: "bo".to_owned(),
        email: "bo@example.com".to_owned(),
        image_url: "https://cdn.test/i".to_owned(),
    };
    let value = serde_json::to_value(doc).unwrap();
    assert_eq!(value["accountId"], "acc");
    assert_eq!(value["imageUrl"], "https://cdn.test/i");
}
