use crate::config::LayoutConfig;
use crate::forest::Forest;
use crate::ir::Record;
use crate::layout::{layout_bounds, route_connectors};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub config: LayoutConfig,
    pub width: f32,
    pub height: f32,
    pub bounds: Option<BoundsDump>,
    pub nodes: Vec<NodeDump>,
    pub connectors: Vec<ConnectorDump>,
    pub detached: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsDump {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub parent_id: Option<String>,
    pub label: String,
    pub level: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ConnectorDump {
    pub from: String,
    pub to: String,
    pub points: Vec<[f32; 2]>,
}

impl LayoutDump {
    pub fn from_forest(forest: &Forest<'_, Record>, config: &LayoutConfig) -> Self {
        let nodes = forest
            .walk()
            .into_iter()
            .map(|id| {
                let node = forest.node(id);
                NodeDump {
                    id: node.data.id.clone(),
                    // The resolved parent, so orphans read as roots.
                    parent_id: node.parent().map(|parent| forest.node(parent).data.id.clone()),
                    label: node.data.display_label().to_string(),
                    level: node.level(),
                    x: node.x,
                    y: node.y,
                    width: config.node_width,
                    height: config.node_height,
                    extra: node.data.extra.clone(),
                }
            })
            .collect();

        let connectors = route_connectors(forest, config)
            .into_iter()
            .map(|connector| ConnectorDump {
                from: forest.node(connector.from).data.id.clone(),
                to: forest.node(connector.to).data.id.clone(),
                points: connector.points.iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();

        let bounds = layout_bounds(forest, config);
        let (width, height) = bounds
            .map(|b| (b.width(), b.height()))
            .unwrap_or((0.0, 0.0));

        LayoutDump {
            config: config.clone(),
            width,
            height,
            bounds: bounds.map(|b| BoundsDump {
                min_x: b.min_x,
                min_y: b.min_y,
                max_x: b.max_x,
                max_y: b.max_y,
            }),
            nodes,
            connectors,
            detached: forest
                .detached()
                .iter()
                .map(|&id| forest.node(id).data.id.clone())
                .collect(),
        }
    }
}

pub fn write_layout_dump_to<W: Write>(writer: W, dump: &LayoutDump) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}

pub fn write_layout_dump(
    path: &Path,
    forest: &Forest<'_, Record>,
    config: &LayoutConfig,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_forest(forest, config);
    write_layout_dump_to(writer, &dump)
}
