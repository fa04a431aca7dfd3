//! OpenAI Agents SDK: live scraping of the public docs site, with canned pages
//! for the core primitives.

use url::Url;

use crate::profile::{LibraryProfile, LiveDocs};
use crate::table::{DocPageMap, DocTable};

pub const ID: &str = "openai-agents";

/// Public documentation site; also scraped for the SDK overview.
pub const DEFAULT_BASE_URL: &str = "https://openai.github.io/openai-agents-python/";

pub const PREFIXES: &[&str] = &["agents.", "openai.agents."];

/// Names that ask for the SDK as a whole.
pub const OVERVIEW_ALIASES: &[&str] = &["agents", "openai_agents", "openai-agents", "sdk"];

/// Keyword → page under [`DEFAULT_BASE_URL`].
pub const PAGES: &[(&str, &str)] = &[
    ("Agent", "agents/"),
    ("Runner", "running_agents/"),
    ("Handoff", "handoffs/"),
    ("Guardrails", "guardrails/"),
    ("Tool", "tools/"),
    ("Tracing", "tracing/"),
    ("Voice", "voice/quickstart/"),
];

const AGENT: &str = r#"# Agent

The core primitive in the OpenAI Agents SDK. Agents are LLMs equipped with instructions and tools.

## Usage:
```python
from agents import Agent, Runner

agent = Agent(name="Assistant", instructions="You are a helpful assistant")

result = Runner.run_sync(agent, "Write a haiku about recursion in programming.")
print(result.final_output)
```

## Parameters:
- name (string): Required. A descriptive name for the agent.
- instructions (string): Required. The system instructions that define the agent's behavior.
- tools (List[Tool]): Optional. A list of tools the agent can use.
- model_settings (ModelSettings): Optional. Settings for the LLM backing the agent.
"#;

const RUNNER_RUN_SYNC: &str = r#"# Runner.run_sync

Runs an agent synchronously and returns the result.

## Parameters:
- agent (Agent): Required. The agent to run.
- input (str): Required. The input to the agent.
- run_context (RunContext): Optional. Context for the run, including values for tool arguments.

## Returns:
- AgentResult: Contains the final output and other information about the run.

## Example:
```python
from agents import Agent, Runner

agent = Agent(name="Assistant", instructions="You are a helpful assistant")

result = Runner.run_sync(agent, "Write a haiku about recursion in programming.")
print(result.final_output)
```
"#;

const HANDOFF: &str = r#"# Handoff

A feature that allows agents to delegate tasks to other agents.

## Usage:
```python
from agents import Agent, Handoff

main_agent = Agent(
    name="Main",
    instructions="You are a helpful assistant that can delegate tasks to specialists."
)

math_agent = Agent(
    name="Math Specialist",
    instructions="You are a math genius who can solve complex math problems."
)

# Register the math agent as a handoff target
main_agent.add_handoff(
    Handoff(
        name="math_specialist",
        target=math_agent,
        description="Delegate math problems to a specialist"
    )
)
```
"#;

const GUARDRAILS: &str = r#"# Guardrails

Enables input validation for agents to enforce safety and other constraints.

## Example:
```python
from agents import Agent, Guardrails

# Create a guardrail that rejects offensive content
guardrails = Guardrails(
    instructions="Reject any input that contains offensive content."
)

agent = Agent(
    name="Assistant",
    instructions="You are a helpful assistant",
    guardrails=guardrails
)
```
"#;

pub const TABLE: &[(&str, &str)] = &[
    ("Agent", AGENT),
    ("Runner.run_sync", RUNNER_RUN_SYNC),
    ("Handoff", HANDOFF),
    ("Guardrails", GUARDRAILS),
];

const FALLBACK: &str = r#"Documentation for {function} not found in the OpenAI Agents SDK. Here's an overview of the SDK:

# OpenAI Agents SDK

The OpenAI Agents SDK enables you to build agentic AI apps in a lightweight, easy-to-use package with very few abstractions. It's a production-ready upgrade of previous experimentation for agents.

## Key Features:
- **Agents**: LLMs equipped with instructions and tools
- **Handoffs**: Allow agents to delegate to other agents for specific tasks
- **Guardrails**: Enable the inputs to agents to be validated
- **Tracing**: Built-in visualization and debugging of agent workflows

## Installation:
```bash
pip install openai-agents
```

## Documentation:
Full documentation available at: https://openai.github.io/openai-agents-python/
"#;

/// Agents SDK profile scraping the site rooted at `base_url`.
pub fn profile(base_url: Url) -> LibraryProfile {
    let live = LiveDocs {
        base_url,
        pages: DocPageMap::from_static(PAGES),
        overview_aliases: OVERVIEW_ALIASES.iter().map(|a| (*a).to_string()).collect(),
        code_language: "python".into(),
    };

    LibraryProfile::new(ID, "OpenAI Agents SDK", DEFAULT_BASE_URL)
        .with_prefixes(PREFIXES)
        .with_table(DocTable::from_static(TABLE))
        .with_live(live)
        .with_fallback(FALLBACK)
}
