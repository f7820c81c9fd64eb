//! Educational notes shown by `--explain`.
//!
//! Each note says *why* a generated file or layout exists, not just what it
//! is. Keys are stable: the generator refers to them by name.

pub const UV_INIT: &str = "uv_init";
pub const SRC_LAYOUT: &str = "src_layout";
pub const CONFIG_IN_PACKAGE: &str = "config_in_package";
pub const ENV_ISOLATION: &str = "env_isolation";
pub const PYPROJECT_TOML: &str = "pyproject_toml";
pub const TESTS_ISOLATION: &str = "tests_isolation";
pub const UV_BENEFITS: &str = "uv_benefits";
pub const GITIGNORE_PATTERNS: &str = "gitignore_patterns";
pub const LICENSE_CHOICE: &str = "license_choice";
pub const DEPENDENCY_PINNING: &str = "dependency_pinning";
pub const ENTRY_POINTS: &str = "entry_points";
pub const WORKSPACE_MEMBERS: &str = "workspace_members";

static EXPLANATIONS: &[(&str, &str)] = &[
    (
        UV_INIT,
        "🎓 WHAT'S HAPPENING: Preparing a uv project

`uv init` style projects have a minimal, standard structure:
- pyproject.toml (project metadata)
- src/<package>/ (your code goes here)
- .python-version (pins the Python version)

BENEFITS:
- Consistent project layout
- Automatic virtual environment setup with `uv sync`
- Compatible with modern Python tools (pytest, ruff, mypy)

📚 Learn more about uv: https://docs.astral.sh/uv/",
    ),
    (
        SRC_LAYOUT,
        "🎓 WHY THE src/ LAYOUT?

Your package lives in src/<name>/.

PROBLEM (without src/):
`import mypackage` finds the local directory even though it was never
installed. Tests pass locally but fail on other machines.

SOLUTION (with src/):
The package must be installed first (uv sync). No accidental imports.

BENEFITS:
1. IMPORT SAFETY: uninstalled code cannot be imported by accident
2. TESTING CLARITY: tests always run against the INSTALLED package
3. PACKAGING SAFETY: packaging bugs show up before release

📚 Learn more: https://packaging.python.org/en/latest/discussions/src-layout-vs-flat-layout/",
    ),
    (
        CONFIG_IN_PACKAGE,
        "🎓 WHY CONFIG INSIDE THE PACKAGE?

Traditional approach: config.yaml at the project root.
PROBLEM: when installed via pip, root files are not included.

Here config.yaml lives inside src/<package>/ and config.py loads it with
`importlib.resources`, which works whether the code is a directory, a
wheel, or a notebook environment such as Colab or Kaggle.

Each package owns its config, which keeps monorepos unambiguous.

📚 Learn more: https://docs.python.org/3/library/importlib.resources.html",
    ),
    (
        ENV_ISOLATION,
        "🎓 WHY .env IS ISOLATED IN THE PACKAGE?

Traditional: .env at the project root.
PROBLEM in monorepos: which .env gets loaded?

Here .env lives inside src/<package>/, so every package has its own
secrets.

⚠️ SECURITY REMINDER:
- NEVER commit .env (it is listed in .gitignore)
- Commit .env.example instead: same keys, no real values
- In production, use real environment variables

📚 Learn more about .env: https://12factor.net/config",
    ),
    (
        PYPROJECT_TOML,
        "🎓 WHY pyproject.toml?

Python packaging used to be spread across setup.py (executable),
setup.cfg, requirements.txt and MANIFEST.in.

PEP 518 made pyproject.toml the single source of truth:
- Declarative, not executable
- TOML: easy to read and parse
- Tools add their own [tool.*] sections
- Works with uv, hatch and setuptools alike

WHAT IT CONTAINS:
[project]       name, version, authors, dependencies
[build-system]  how to build your package
[tool.*]        pytest, ruff, mypy settings

📚 Learn more:
- PEP 518: https://peps.python.org/pep-0518/
- PEP 621: https://peps.python.org/pep-0621/",
    ),
    (
        TESTS_ISOLATION,
        "🎓 WHY TESTS INSIDE THE PACKAGE?

Tests live in src/<package>/tests/ instead of a top-level tests/.

BENEFITS:
- Tests travel with the code they exercise
- Clear ownership in workspaces with several packages

A top-level tests/ directory is fine too; in-package tests are chosen for
clarity in workspaces. pytest discovers them without configuration.

📚 Learn more: https://docs.pytest.org/en/stable/goodpractices.html",
    ),
    (
        UV_BENEFITS,
        "🎓 WHY uv?

uv is a Python package manager written in Rust.

SPEED: 10-100x faster than pip, parallel downloads, fast resolution.

FEATURES:
- Built-in virtual environment management
- Lock file (uv.lock) for reproducible installs
- Compatible with pip and PyPI
- One tool: uv sync, uv run, uv add, uv build

📚 Learn more:
- Official docs: https://docs.astral.sh/uv/
- GitHub: https://github.com/astral-sh/uv",
    ),
    (
        GITIGNORE_PATTERNS,
        "🎓 WHY .gitignore?

Git tracks EVERYTHING by default. Without .gitignore you would commit
datasets, API keys, __pycache__ and OS junk.

RULE OF THUMB: if it can be REGENERATED or is PERSONAL, ignore it.

IGNORED: .venv/, __pycache__/, dist/, build/, *.egg-info/, .env, IDE
settings, .DS_Store
KEPT: source code, .env.example, README, LICENSE, pyproject.toml, uv.lock

📚 Learn more:
- Git docs: https://git-scm.com/docs/gitignore
- Templates: https://github.com/github/gitignore",
    ),
    (
        LICENSE_CHOICE,
        "🎓 WHY LICENSES MATTER?

Without a license your code is \"all rights reserved\": nobody can legally
use, modify or distribute it.

MIT         do whatever you want, keep the notice. Best for most projects.
Apache-2.0  like MIT plus an explicit patent grant. Common in enterprise.
GPLv3       derivatives must stay open source.

📚 Learn more: https://choosealicense.com/",
    ),
    (
        DEPENDENCY_PINNING,
        "🎓 WHY VERSION PINNING MATTERS?

1. \"package>=1.0\"   minimum version, flexible. Best for libraries.
2. \"package==1.0.0\" exact version, reproducible. Best for applications.
3. \"package~=1.0\"   compatible release (>=1.0, <2.0).

Lock files (uv.lock) record the exact version of every dependency,
including transitive ones, for reproducible installs.

📚 Learn more: https://peps.python.org/pep-0440/",
    ),
    (
        ENTRY_POINTS,
        "🎓 WHY ENTRY POINTS / SCRIPTS?

Entry points create CLI commands when your package is installed:

[project.scripts]
myapp = \"mypackage.main:main\"

After installation users run `myapp` instead of
`python -m mypackage.main`.

FORMAT: \"command-name\" = \"module.path:function\", where the function
takes no required arguments.

📚 Learn more: https://packaging.python.org/en/latest/specifications/entry-points/",
    ),
    (
        WORKSPACE_MEMBERS,
        "🎓 WHY WORKSPACES / MONOREPOS?

A workspace is several packages in one repository, sharing one lock file.

BENEFITS: shared dependencies, atomic commits across packages, easier
refactoring, a single CI pipeline.

my-project/
├── src/
│   ├── core/
│   └── api/
├── pyproject.toml   (workspace root)
└── uv.lock          (shared lock file)

Use it for related packages developed together; skip it for a single
package.

📚 Learn more: https://docs.astral.sh/uv/concepts/workspaces/",
    ),
];

pub fn explanation(key: &str) -> Option<&'static str> {
    EXPLANATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

pub fn explanation_keys() -> impl Iterator<Item = &'static str> {
    EXPLANATIONS.iter().map(|(k, _)| *k)
}
