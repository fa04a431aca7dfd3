//! OpenAI Python client: canned API reference entries.

use crate::profile::LibraryProfile;
use crate::table::DocTable;

pub const ID: &str = "openai";

pub const DOCS_URL: &str = "https://platform.openai.com/docs/api-reference";

pub const PREFIXES: &[&str] = &["openai."];

// `ChatCompletion.create` contains `Completion.create`; keep it first.
pub const TABLE: &[(&str, &str)] = &[
    (
        "ChatCompletion.create",
        r#"# ChatCompletion.create

Creates a chat completion for the provided messages.

## Parameters:
- model (str): Required. ID of the model to use, e.g. "gpt-4o".
- messages (List[dict]): Required. The conversation so far, as role/content pairs.
- temperature (float): Optional. Sampling temperature between 0 and 2.
- max_tokens (int): Optional. Upper bound on generated tokens.
- stream (bool): Optional. Stream partial message deltas.

## Example:
```python
from openai import OpenAI

client = OpenAI()
completion = client.chat.completions.create(
    model="gpt-4o",
    messages=[{"role": "user", "content": "Hello!"}],
)
print(completion.choices[0].message.content)
```
"#,
    ),
    (
        "Completion.create",
        r#"# Completion.create

Creates a completion for the provided prompt and parameters. Legacy endpoint.

## Parameters:
- model (str): Required. ID of the model to use.
- prompt (str | List[str]): Required. The prompt(s) to complete.
- max_tokens (int): Optional. Upper bound on generated tokens.

## Example:
```python
completion = client.completions.create(
    model="gpt-3.5-turbo-instruct",
    prompt="Say this is a test",
)
```
"#,
    ),
    (
        "Embedding.create",
        r#"# Embedding.create

Creates an embedding vector representing the input text.

## Parameters:
- model (str): Required. ID of the embedding model.
- input (str | List[str]): Required. Text to embed.

## Example:
```python
response = client.embeddings.create(
    model="text-embedding-3-small",
    input="The food was delicious",
)
vector = response.data[0].embedding
```
"#,
    ),
    (
        "Image.create",
        r#"# Image.create

Creates an image given a prompt.

## Parameters:
- prompt (str): Required. A text description of the desired image.
- n (int): Optional. Number of images to generate.
- size (str): Optional. Image dimensions, e.g. "1024x1024".

## Example:
```python
response = client.images.generate(prompt="A cute baby sea otter", n=1)
url = response.data[0].url
```
"#,
    ),
];

pub fn profile() -> LibraryProfile {
    LibraryProfile::new(ID, "OpenAI API", DOCS_URL)
        .with_prefixes(PREFIXES)
        .with_table(DocTable::from_static(TABLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_completion_is_not_shadowed() {
        let table = DocTable::from_static(TABLE);
        let (key, body) = table.lookup("ChatCompletion.create").unwrap();
        assert_eq!(key, "ChatCompletion.create");
        assert!(body.contains("Creates a chat completion for the provided messages."));
    }
}
