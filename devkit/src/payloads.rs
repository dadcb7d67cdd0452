/*!
Canned payload builders for the external APIs

Mirrors the wire shapes the kernel's outbound services consume: Overpass
element arrays and chat-completion responses. Keeps tests free of inline
JSON literals drifting out of sync.
*/

use serde_json::{json, Value};

pub struct SamplePayloads;

impl SamplePayloads {
    /// One Overpass node element. `lat`/`lon` are optional so tests can
    /// produce rows with missing coordinates.
    pub fn overpass_node(
        id: i64,
        lat: Option<f64>,
        lon: Option<f64>,
        name: Option<&str>,
        amenity: Option<&str>,
    ) -> Value {
        let mut element = json!({ "type": "node", "id": id });
        if let Some(lat) = lat {
            element["lat"] = json!(lat);
        }
        if let Some(lon) = lon {
            element["lon"] = json!(lon);
        }
        let mut tags = serde_json::Map::new();
        if let Some(name) = name {
            tags.insert("name".into(), json!(name));
        }
        if let Some(amenity) = amenity {
            tags.insert("amenity".into(), json!(amenity));
        }
        if !tags.is_empty() {
            element["tags"] = Value::Object(tags);
        }
        element
    }

    /// A full Overpass interpreter response body.
    pub fn overpass_body(elements: Vec<Value>) -> Value {
        json!({ "version": 0.6, "elements": elements })
    }

    /// A successful chat-completion response carrying one assistant message.
    pub fn chat_completion(content: &str) -> Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    /// A chat-completion error body in the OpenRouter/OpenAI shape.
    pub fn chat_error(message: &str) -> Value {
        json!({ "error": { "message": message } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_omits_missing_fields() {
        let node = SamplePayloads::overpass_node(7, Some(16.8), None, None, Some("clinic"));
        assert_eq!(node["id"], 7);
        assert_eq!(node["lat"], 16.8);
        assert!(node.get("lon").is_none());
        assert_eq!(node["tags"]["amenity"], "clinic");
        assert!(node["tags"].get("name").is_none());
    }

    #[test]
    fn chat_completion_carries_content() {
        let body = SamplePayloads::chat_completion("drink water");
        assert_eq!(body["choices"][0]["message"]["content"], "drink water");
    }
}
