//! `viperx learn`: curated links per topic.

use viperx_core::domain::education::{self, Topic};

use crate::{
    cli::LearnArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: LearnArgs, output: OutputManager) -> CliResult<()> {
    let Some(key) = args.topic else {
        return list_topics(&output);
    };

    let topic = education::topic(key.trim()).ok_or_else(|| CliError::UnknownTopic {
        topic: key.clone(),
        available: education::topic_keys().collect(),
    })?;

    if output.is_json() {
        return output.json(topic);
    }
    output.panel(topic.title, &topic_body(topic))?;
    Ok(())
}

fn list_topics(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(education::topics());
    }

    output.header("Learning topics")?;
    let rows: Vec<Vec<String>> = education::topics()
        .iter()
        .map(|t| vec![t.key.to_string(), t.title.to_string()])
        .collect();
    output.table(&["Topic", "Title"], &rows)?;
    output.print("")?;
    output.info("Run 'viperx learn <topic>' for links.")?;
    Ok(())
}

fn topic_body(topic: &Topic) -> String {
    let mut body = format!("{}\n", topic.description);
    for link in topic.links {
        body.push_str(&format!("\n• {}\n  {}", link.name, link.url));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lists_every_link() {
        let topic = education::topic("uv").unwrap();
        let body = topic_body(topic);
        assert!(body.starts_with(topic.description));
        for link in topic.links {
            assert!(body.contains(link.url));
        }
    }
}
