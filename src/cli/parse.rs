use pathgraph_core::{Cost, NodeAttrs};

/// Edge given as `FROM:TO[:COST]`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub cost: Option<Cost>,
}

/// Node given as `ID[:HEURISTIC[:LABEL]]`; a bare ID keeps default attributes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub attrs: Option<NodeAttrs>,
}

fn parse_cost(raw: &str) -> std::result::Result<Cost, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid cost '{}': not a number", raw))?;
    Cost::new(value).map_err(|e| e.to_string())
}

fn non_empty<'a>(part: Option<&'a str>, what: &str) -> std::result::Result<&'a str, String> {
    match part {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(format!("missing {}", what)),
    }
}

/// Parse an edge spec from a CLI argument
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let mut parts = s.splitn(3, ':');
    let from = non_empty(parts.next(), "edge source")?;
    let to = non_empty(parts.next(), "edge target")?;
    let cost = parts.next().map(parse_cost).transpose()?;

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        cost,
    })
}

/// Parse a node spec from a CLI argument
pub fn parse_node(s: &str) -> std::result::Result<NodeSpec, String> {
    let mut parts = s.splitn(3, ':');
    let id = non_empty(parts.next(), "node id")?;

    let attrs = match parts.next() {
        None => None,
        Some(raw) => {
            let mut attrs = NodeAttrs::new(parse_cost(raw)?);
            if let Some(label) = parts.next().filter(|l| !l.is_empty()) {
                attrs = attrs.with_label(label);
            }
            Some(attrs)
        }
    };

    Ok(NodeSpec {
        id: id.to_string(),
        attrs,
    })
}
