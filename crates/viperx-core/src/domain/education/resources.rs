//! Curated learning links, grouped by topic.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [ResourceLink],
}

const fn link(name: &'static str, url: &'static str) -> ResourceLink {
    ResourceLink { name, url }
}

static TOPICS: &[Topic] = &[
    Topic {
        key: "packaging",
        title: "📦 Python Packaging",
        description: "Learn how to package and distribute Python code",
        links: &[
            link("Python Packaging Guide", "https://packaging.python.org/"),
            link("PEP 518 - pyproject.toml", "https://peps.python.org/pep-0518/"),
            link("PEP 621 - Project Metadata", "https://peps.python.org/pep-0621/"),
            link("PEP 440 - Version Specifiers", "https://peps.python.org/pep-0440/"),
            link(
                "Packaging Tutorial",
                "https://packaging.python.org/en/latest/tutorials/packaging-projects/",
            ),
        ],
    },
    Topic {
        key: "uv",
        title: "⚡ uv - Fast Python Package Manager",
        description: "The modern Rust-based package manager",
        links: &[
            link("Official Documentation", "https://docs.astral.sh/uv/"),
            link("GitHub Repository", "https://github.com/astral-sh/uv"),
            link("Concepts: Workspaces", "https://docs.astral.sh/uv/concepts/workspaces/"),
            link("Concepts: Projects", "https://docs.astral.sh/uv/concepts/projects/"),
        ],
    },
    Topic {
        key: "testing",
        title: "🧪 Python Testing",
        description: "Write better tests with pytest",
        links: &[
            link("pytest Documentation", "https://docs.pytest.org/"),
            link(
                "pytest Good Practices",
                "https://docs.pytest.org/en/stable/goodpractices.html",
            ),
            link("Testing Best Practices", "https://docs.python-guide.org/writing/tests/"),
            link("Coverage.py", "https://coverage.readthedocs.io/"),
        ],
    },
    Topic {
        key: "config",
        title: "⚙️ Configuration Management",
        description: "Manage application configuration properly",
        links: &[
            link("12-Factor App - Config", "https://12factor.net/config"),
            link("python-dotenv", "https://pypi.org/project/python-dotenv/"),
            link(
                "importlib.resources",
                "https://docs.python.org/3/library/importlib.resources.html",
            ),
            link("YAML in Python", "https://pyyaml.org/wiki/PyYAMLDocumentation"),
        ],
    },
    Topic {
        key: "git",
        title: "🔧 Git & Version Control",
        description: "Master version control with Git",
        links: &[
            link("Pro Git Book (Free)", "https://git-scm.com/book/"),
            link("gitignore Documentation", "https://git-scm.com/docs/gitignore"),
            link("GitHub gitignore Templates", "https://github.com/github/gitignore"),
            link(
                "Git Cheat Sheet",
                "https://education.github.com/git-cheat-sheet-education.pdf",
            ),
        ],
    },
    Topic {
        key: "licenses",
        title: "📜 Open Source Licenses",
        description: "Choose the right license for your project",
        links: &[
            link("Choose a License", "https://choosealicense.com/"),
            link("SPDX License List", "https://spdx.org/licenses/"),
            link("OSI Approved Licenses", "https://opensource.org/licenses/"),
            link("License Comparison", "https://choosealicense.com/licenses/"),
        ],
    },
    Topic {
        key: "project-structure",
        title: "🏗️ Project Structure",
        description: "Organize your Python projects",
        links: &[
            link(
                "src Layout vs Flat Layout",
                "https://packaging.python.org/en/latest/discussions/src-layout-vs-flat-layout/",
            ),
            link("Structuring Your Project", "https://docs.python-guide.org/writing/structure/"),
            link(
                "Python Application Layouts",
                "https://realpython.com/python-application-layouts/",
            ),
        ],
    },
    Topic {
        key: "best-practices",
        title: "✨ Python Best Practices",
        description: "Write better Python code",
        links: &[
            link("The Hitchhiker's Guide to Python", "https://docs.python-guide.org/"),
            link("PEP 8 - Style Guide", "https://peps.python.org/pep-0008/"),
            link("Real Python Tutorials", "https://realpython.com/"),
            link(
                "Python Design Patterns",
                "https://refactoring.guru/design-patterns/python",
            ),
        ],
    },
    Topic {
        key: "ml-dl",
        title: "🤖 Machine Learning & Deep Learning",
        description: "ML/DL specific resources",
        links: &[
            link("PyTorch Documentation", "https://pytorch.org/docs/"),
            link("TensorFlow Documentation", "https://www.tensorflow.org/api_docs"),
            link(
                "scikit-learn User Guide",
                "https://scikit-learn.org/stable/user_guide.html",
            ),
            link("Kaggle Learn", "https://www.kaggle.com/learn"),
        ],
    },
];

/// All topics, in display order.
pub fn topics() -> &'static [Topic] {
    TOPICS
}

pub fn topic(key: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.key == key)
}

pub fn topic_keys() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|t| t.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = topic_keys().collect();
        assert_eq!(keys.len(), topics().len());
    }

    #[test]
    fn every_topic_has_https_links() {
        for t in topics() {
            assert!(!t.links.is_empty(), "{} has no links", t.key);
            assert!(t.links.iter().all(|l| l.url.starts_with("https://")));
        }
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(topic("uv").map(|t| t.links.len()), Some(4));
        assert!(topic("cobol").is_none());
    }

    #[test]
    fn order_is_stable() {
        assert_eq!(topic_keys().next(), Some("packaging"));
        assert_eq!(topic_keys().last(), Some("ml-dl"));
    }
}
