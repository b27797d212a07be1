use std::{
    fmt::Debug,
    io::{self, Cursor, Write},
};

use crate::core::{EdgeSet, VertexSet};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the [DOT](https://graphviz.org/doc/info/lang.html) language.
///
/// Edge statements are written before vertex statements. Vertices are named
/// by their keys. Every vertex gets a label; an edge gets one only if the edge
/// label function returns `Some`.
pub struct Dot<'f, V, E> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String + 'f>,
    get_edge_label: Box<dyn Fn(&E) -> Option<String> + 'f>,
}

impl<'f, V, E> Dot<'f, V, E> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&V) -> String + 'f,
        FE: Fn(&E) -> Option<String> + 'f,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        G: VertexSet<Vertex = V> + EdgeSet<Edge = E>,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<V, E, G> Export<G> for Dot<'_, V, E>
where
    G: VertexSet<Vertex = V> + EdgeSet<Edge = E>,
{
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph {} {{", dot_id(&self.name))?;

        for edge in graph.edges() {
            let tail = key_id(&graph.id_map(edge.tail));
            let head = key_id(&graph.id_map(edge.head));

            match (self.get_edge_label)(edge.attr) {
                Some(label) => writeln!(out, "    {tail} -> {head} [label={}];", quote(&label))?,
                None => writeln!(out, "    {tail} -> {head};")?,
            }
        }

        for vertex in graph.vertices() {
            writeln!(
                out,
                "    {} [label={}];",
                key_id(&graph.id_map(vertex)),
                quote(&(self.get_vertex_label)(vertex))
            )?;
        }

        writeln!(out, "}}")?;

        Ok(())
    }
}

fn key_id(key: &impl Debug) -> String {
    let repr = format!("{key:?}");

    // Debug of string keys is already a quoted DOT id.
    if repr.len() >= 2 && repr.starts_with('"') && repr.ends_with('"') {
        repr
    } else {
        dot_id(&repr)
    }
}

fn dot_id(id: &str) -> String {
    let is_numeral = !id.is_empty()
        && id.strip_prefix('-').unwrap_or(id).chars().all(|c| c.is_ascii_digit())
        && id != "-";
    let is_identifier = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_numeral || is_identifier {
        id.to_owned()
    } else {
        quote(id)
    }
}

// DOT quoted strings only know escaped quotes and backslashes. A newline is
// written as the centered line break `\n`.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');

    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}
