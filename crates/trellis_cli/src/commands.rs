// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command definitions and handlers for the `trellis` binary.
//!
//! Each subcommand maps to one handler. Handlers return errors instead
//! of exiting so they stay callable from tests.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};
use trellis_graph::{EvalContext, EvalError, Evaluator, Scene, SceneError, SocketValue};
use trellis_snapshot::{
    read_snapshot, resolve, write_snapshot, write_snapshot_pretty, SnapshotError,
};

use crate::demo;

/// Tree name used when none is given, matching the starter scene.
pub const DEFAULT_TREE: &str = "Geometry Nodes";

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "trellis", version, about = "Geometry node scenes at the command line")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// All `trellis` subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a scene file with a small starter tree.
    Init {
        /// Path of the scene file to create.
        scene: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long)]
        force: bool,
    },

    /// List the trees in a scene and their nodes.
    List {
        /// Path of the scene file.
        scene: PathBuf,
    },

    /// Export one tree as a JSON snapshot.
    Export {
        /// Path of the scene file.
        scene: PathBuf,

        /// Name of the tree to export.
        #[arg(long, default_value = DEFAULT_TREE)]
        tree: String,

        /// Path of the snapshot file to write.
        #[arg(long)]
        output: PathBuf,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Import a JSON snapshot into a scene as a tree.
    Import {
        /// Path of the snapshot file to read.
        snapshot: PathBuf,

        /// Path of the scene file to update (created if missing).
        #[arg(long)]
        scene: PathBuf,

        /// Name for the imported tree; defaults to the snapshot file stem.
        #[arg(long)]
        tree: Option<String>,
    },

    /// Evaluate one node output and print the result.
    Eval {
        /// Path of the scene file.
        scene: PathBuf,

        /// Name of the tree holding the node.
        #[arg(long, default_value = DEFAULT_TREE)]
        tree: String,

        /// Name of the node to evaluate.
        #[arg(long)]
        node: String,

        /// Output socket identifier; defaults to the node's first output.
        #[arg(long)]
        socket: Option<String>,

        /// Element index visible to Index nodes.
        #[arg(long, default_value = "0")]
        index: i32,
    },
}

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scene file could not be read or written
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Snapshot export or import failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Node evaluation failed
    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Refusing to overwrite an existing scene
    #[error("Scene already exists: {0:?} (pass --force to overwrite)")]
    SceneExists(PathBuf),

    /// Named tree is not in the scene
    #[error("Tree not found: {0:?}")]
    TreeNotFound(String),

    /// Named node is not in the tree
    #[error("Node not found: {0:?}")]
    NodeNotFound(String),

    /// Node has no output sockets to evaluate
    #[error("Node has no outputs: {0:?}")]
    NoOutputs(String),
}

/// Dispatches a parsed command line to its handler.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init { scene, force } => init(&scene, force),
        Command::List { scene } => list(&scene),
        Command::Export {
            scene,
            tree,
            output,
            pretty,
        } => export(&scene, &tree, &output, pretty),
        Command::Import {
            snapshot,
            scene,
            tree,
        } => import(&snapshot, &scene, tree),
        Command::Eval {
            scene,
            tree,
            node,
            socket,
            index,
        } => eval(&scene, &tree, &node, socket.as_deref(), index),
    }
}

fn init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::SceneExists(path.to_path_buf()));
    }

    let mut scene = Scene::new();
    scene.add_tree(demo::starter_tree());
    scene.save(path)?;
    info!("Wrote starter scene to {}", path.display());
    println!("Created {} with tree {DEFAULT_TREE:?}", path.display());
    Ok(())
}

fn list(path: &Path) -> Result<(), CliError> {
    let scene = Scene::load(path)?;
    debug!("Loaded {} trees from {}", scene.tree_count(), path.display());

    if scene.is_empty() {
        println!("Scene {} has no trees.", path.display());
        return Ok(());
    }
    for tree in scene.trees() {
        println!(
            "{} ({} nodes, {} links)",
            tree.name,
            tree.node_count(),
            tree.link_count()
        );
        for node in tree.nodes() {
            println!(
                "  {} [{}] at ({}, {})",
                node.name, node.type_tag, node.location[0], node.location[1]
            );
        }
    }
    Ok(())
}

fn export(path: &Path, tree_name: &str, output: &Path, pretty: bool) -> Result<(), CliError> {
    let scene = Scene::load(path)?;
    let tree = scene
        .tree(tree_name)
        .ok_or_else(|| CliError::TreeNotFound(tree_name.to_string()))?;

    if pretty {
        write_snapshot_pretty(tree, output)?;
    } else {
        write_snapshot(tree, output)?;
    }
    println!(
        "Exported {:?} ({} nodes) to {}",
        tree_name,
        tree.node_count(),
        output.display()
    );
    Ok(())
}

fn import(snapshot: &Path, scene_path: &Path, tree_name: Option<String>) -> Result<(), CliError> {
    let records = read_snapshot(snapshot)?;
    let name = match tree_name {
        Some(name) => name,
        None => snapshot
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(DEFAULT_TREE)
            .to_string(),
    };
    let tree = resolve(name.as_str(), &records)?;
    let node_count = tree.node_count();

    let mut scene = if scene_path.exists() {
        Scene::load(scene_path)?
    } else {
        Scene::new()
    };
    let replaced = scene.tree(&name).is_some();
    scene.add_tree(tree);
    scene.save(scene_path)?;

    if replaced {
        println!(
            "Replaced tree {name:?} ({node_count} nodes) in {}",
            scene_path.display()
        );
    } else {
        println!(
            "Added tree {name:?} ({node_count} nodes) to {}",
            scene_path.display()
        );
    }
    Ok(())
}

fn eval(
    path: &Path,
    tree_name: &str,
    node_name: &str,
    socket: Option<&str>,
    index: i32,
) -> Result<(), CliError> {
    let scene = Scene::load(path)?;
    let tree = scene
        .tree(tree_name)
        .ok_or_else(|| CliError::TreeNotFound(tree_name.to_string()))?;
    let node = tree
        .node_by_name(node_name)
        .ok_or_else(|| CliError::NodeNotFound(node_name.to_string()))?;
    let identifier = match socket {
        Some(identifier) => identifier.to_string(),
        None => node
            .outputs
            .first()
            .map(|socket| socket.identifier.clone())
            .ok_or_else(|| CliError::NoOutputs(node_name.to_string()))?,
    };

    let mut evaluator = Evaluator::new(tree).with_context(EvalContext { index });
    let value = evaluator.evaluate(node.id, &identifier)?;
    println!("{node_name}.{identifier} = {}", format_value(&value));
    Ok(())
}

fn format_value(value: &SocketValue) -> String {
    match value {
        SocketValue::Float(v) => format!("{v}"),
        SocketValue::Int(v) => format!("{v}"),
        SocketValue::Boolean(v) => format!("{v}"),
        SocketValue::Vector([x, y, z]) => format!("({x}, {y}, {z})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_export_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.trellis");
        let scene_arg = scene.to_str().unwrap();

        run(parse(&["trellis", "init", scene_arg])).unwrap();
        assert!(scene.exists());

        let err = run(parse(&["trellis", "init", scene_arg])).unwrap_err();
        assert!(matches!(err, CliError::SceneExists(_)));
        run(parse(&["trellis", "init", scene_arg, "--force"])).unwrap();

        let snapshot = dir.path().join("tree.json");
        let snapshot_arg = snapshot.to_str().unwrap();
        run(parse(&[
            "trellis", "export", scene_arg, "--output", snapshot_arg,
        ]))
        .unwrap();
        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&snapshot).unwrap()).unwrap();
        assert_eq!(doc.as_array().unwrap().len(), 6);

        run(parse(&[
            "trellis", "import", snapshot_arg, "--scene", scene_arg, "--tree", "Imported",
        ]))
        .unwrap();
        let loaded = Scene::load(&scene).unwrap();
        assert_eq!(loaded.tree_count(), 2);
        assert_eq!(loaded.tree("Imported").unwrap().node_count(), 6);

        run(parse(&["trellis", "list", scene_arg])).unwrap();
        run(parse(&[
            "trellis",
            "eval",
            scene_arg,
            "--node",
            "Combine XYZ",
        ]))
        .unwrap();
    }

    #[test]
    fn test_missing_names_reported() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.trellis");
        let scene_arg = scene.to_str().unwrap();
        run(parse(&["trellis", "init", scene_arg])).unwrap();

        let out = dir.path().join("out.json");
        let err = run(parse(&[
            "trellis",
            "export",
            scene_arg,
            "--tree",
            "Missing",
            "--output",
            out.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, CliError::TreeNotFound(name) if name == "Missing"));

        let err = run(parse(&[
            "trellis", "eval", scene_arg, "--node", "Missing",
        ]))
        .unwrap_err();
        assert!(matches!(err, CliError::NodeNotFound(name) if name == "Missing"));
    }
}
