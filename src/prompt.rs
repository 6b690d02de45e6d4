use crate::models::{Content, GenerateRequest, GenerationConfig, Part, UserProfile};

/// Build the full Gemini request for one profile submission: the curation
/// prompt plus the strict response schema. The builder does not validate the
/// profile; the input surface guarantees non-empty fields.
pub fn build(profile: &UserProfile) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(profile),
            }],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Some(response_schema()),
        }),
    }
}

fn build_prompt(profile: &UserProfile) -> String {
    format!(
        r#"Act as a world-class gift recommendation expert specializing in the Indian market.
Analyze the following recipient profile and provide 5 highly thoughtful, modern, and relevant gift suggestions.

Recipient Details:
Age: {age}
Occasion: {occasion}
Hobbies/Interests: {hobbies}
Budget: {budget}

Guidelines:
- ALL budget categories and price references MUST be in Indian Rupees (INR) using the ₹ symbol.
- Focus on items available in India (e.g., local artisanal brands, popular e-commerce platforms like Amazon.in, Tata Cliq, etc.).
- Avoid generic ideas unless they can be personalized.
- Each recommendation must be comprehensive and culturally relevant to the occasion in an Indian context."#,
        age = profile.age,
        occasion = profile.occasion,
        hobbies = profile.hobbies,
        budget = profile.budget,
    )
}

/// Schema handed to the model: an array of objects, each with exactly the six
/// required fields the normalizer checks for.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "giftName": { "type": "STRING", "description": "GIFT NAME" },
                "whyItFits": { "type": "STRING", "description": "WHY IT FITS THIS PERSON" },
                "budgetCategory": { "type": "STRING", "description": "APPROXIMATE BUDGET CATEGORY IN INR (e.g., ₹2,000 - ₹3,000)" },
                "alternatives": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "ALTERNATIVE OPTIONS"
                },
                "type": { "type": "STRING", "description": "IS IT PRACTICAL OR SENTIMENTAL" },
                "targetAudience": { "type": "STRING", "description": "WHO WOULD LOVE THIS MOST" }
            },
            "required": ["giftName", "whyItFits", "budgetCategory", "alternatives", "type", "targetAudience"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: "28".to_string(),
            occasion: "Birthday".to_string(),
            hobbies: "reading".to_string(),
            budget: "₹1000".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_all_profile_fields() {
        let profile = sample_profile();
        let prompt = build_prompt(&profile);
        assert!(prompt.contains("28"));
        assert!(prompt.contains("Birthday"));
        assert!(prompt.contains("reading"));
        assert!(prompt.contains("₹1000"));
    }

    #[test]
    fn test_prompt_mandates_inr() {
        let prompt = build_prompt(&sample_profile());
        assert!(prompt.contains("Indian Rupees (INR)"));
        assert!(prompt.contains("5 highly thoughtful"));
    }

    #[test]
    fn test_schema_requires_exactly_six_fields() {
        let schema = response_schema();
        let required = schema["items"]["required"]
            .as_array()
            .expect("required should be an array");
        let names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "giftName",
                "whyItFits",
                "budgetCategory",
                "alternatives",
                "type",
                "targetAudience"
            ]
        );
        let properties = schema["items"]["properties"]
            .as_object()
            .expect("properties should be an object");
        assert_eq!(properties.len(), 6);
    }

    #[test]
    fn test_build_attaches_json_generation_config() {
        let request = build(&sample_profile());
        let config = request.generation_config.expect("config should be set");
        assert_eq!(config.response_mime_type, "application/json");
        assert!(config.response_schema.is_some());
        assert_eq!(request.contents.len(), 1);
    }
}
