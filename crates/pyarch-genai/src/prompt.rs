//! Prompt wrapper and structured output schema

use serde_json::{json, Value};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Wrap the user's request in the fixed architect instructions
pub fn build_prompt(user_prompt: &str) -> String {
    format!(
        r#"You are an expert Python software architect and developer.
Your task is to generate a complete, production-ready Python codebase based on the following user request:

"{user_prompt}"

Requirements:
1. Structure the project according to modern Python best practices (e.g., using a 'src' directory if applicable, or flat structure for simple scripts).
2. Include a 'requirements.txt' or 'pyproject.toml' for dependencies.
3. Include a 'README.md' with setup and usage instructions.
4. Ensure all code is properly typed (type hints) and documented (docstrings).
5. The 'projectName' should be a valid, slugified directory name.
6. Return the response strictly as a JSON object matching the defined schema.
"#
    )
}

/// Response schema in the Gemini OpenAPI subset (uppercase type names)
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "projectName": {
                "type": "STRING",
                "description": "A slugified name for the project folder"
            },
            "description": {
                "type": "STRING",
                "description": "A short summary of what was generated"
            },
            "files": {
                "type": "ARRAY",
                "description": "List of files to generate",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "path": {
                            "type": "STRING",
                            "description": "Relative file path (e.g., main.py, src/utils.py)"
                        },
                        "content": {
                            "type": "STRING",
                            "description": "The complete source code content of the file"
                        }
                    },
                    "required": ["path", "content"]
                }
            }
        },
        "required": ["projectName", "files", "description"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_request() {
        let prompt = build_prompt("a CLI todo app");
        assert!(prompt.contains("\"a CLI todo app\""));
        assert!(prompt.contains("README.md"));
        assert!(prompt.contains("projectName"));
    }

    #[test]
    fn test_schema_requires_all_top_level_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["projectName", "files", "description"]);
    }

    #[test]
    fn test_schema_file_items_require_path_and_content() {
        let schema = response_schema();
        let items = &schema["properties"]["files"]["items"];
        assert_eq!(items["type"], "OBJECT");
        assert_eq!(items["required"], json!(["path", "content"]));
    }
}
