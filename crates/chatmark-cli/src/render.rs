//! Turns render groups into terminal output.
//!
//! Flow groups become wrapped prose with bold inline code; code blocks get a
//! header line and a distinct colour. Both the viewer (ratatui lines) and the
//! `--print` path (crossterm styled text) share the same line layout.

use std::io::Write;

use anyhow::Result;
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{RenderGroup, Segment, SegmentKind, segment, segment_groups, to_markup};
use crossterm::style::Stylize;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use serde::Serialize;

use crate::messages::Message;

/// A run of text on one output line, tagged with how to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Prose(&'a str),
    InlineCode(&'a str),
    Separator,
    BlockHeader(&'a str),
    Code(&'a str),
}

/// Lays out groups as lines of pieces, with a blank line between groups.
pub fn layout<'a>(groups: &'a [RenderGroup], config: &'a Config) -> Vec<Vec<Piece<'a>>> {
    let mut lines = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        match group {
            RenderGroup::Flow { segments } => layout_flow(segments, &mut lines),
            RenderGroup::Block { segment } => layout_block(segment, config, &mut lines),
        }
    }
    lines
}

fn layout_flow<'a>(segments: &'a [Segment], lines: &mut Vec<Vec<Piece<'a>>>) {
    let mut current: Vec<Piece<'a>> = Vec::new();

    for segment in segments {
        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(std::mem::take(&mut current));
            }
            if part.is_empty() {
                continue;
            }
            if !current.is_empty() {
                current.push(Piece::Separator);
            }
            current.push(match segment.kind {
                SegmentKind::InlineCode => Piece::InlineCode(part),
                _ => Piece::Prose(part),
            });
        }
    }
    lines.push(current);
}

fn layout_block<'a>(segment: &'a Segment, config: &'a Config, lines: &mut Vec<Vec<Piece<'a>>>) {
    if config.show_language {
        let label = segment
            .language()
            .unwrap_or(config.code_block_label.as_str());
        lines.push(vec![Piece::BlockHeader(label)]);
    }
    for line in segment.text.lines() {
        lines.push(vec![Piece::Code(line)]);
    }
}

/// Renders a message for the ratatui viewer.
pub fn to_lines(text: &str, config: &Config) -> Vec<Line<'static>> {
    let groups = segment_groups(text);
    layout(&groups, config)
        .into_iter()
        .map(|pieces| Line::from(pieces.into_iter().map(to_span).collect::<Vec<_>>()))
        .collect()
}

fn to_span(piece: Piece<'_>) -> Span<'static> {
    match piece {
        Piece::Prose(t) => Span::raw(t.to_string()),
        Piece::Separator => Span::raw(" "),
        Piece::InlineCode(t) => Span::styled(
            t.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Piece::BlockHeader(t) => Span::styled(
            t.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Piece::Code(t) => Span::styled(format!("  {t}"), Style::default().fg(Color::Green)),
    }
}

#[derive(Serialize)]
struct MessageOut<'a> {
    name: &'a str,
    groups: Vec<RenderGroup>,
}

/// Writes messages to `out` in the given format.
pub fn write_messages(
    out: &mut impl Write,
    messages: &[Message],
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload: Vec<_> = messages
                .iter()
                .map(|m| MessageOut {
                    name: &m.name,
                    groups: segment_groups(&m.text),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &payload)?;
            writeln!(out)?;
        }
        OutputFormat::Markup => {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", to_markup(&segment(&message.text)))?;
            }
        }
        OutputFormat::Styled => {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                if messages.len() > 1 {
                    writeln!(out, "{}", format!("== {} ==", message.name).dim())?;
                }
                let groups = segment_groups(&message.text);
                for pieces in layout(&groups, config) {
                    for piece in pieces {
                        write_styled(out, piece)?;
                    }
                    writeln!(out)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_styled(out: &mut impl Write, piece: Piece<'_>) -> std::io::Result<()> {
    match piece {
        Piece::Prose(t) => write!(out, "{t}"),
        Piece::Separator => write!(out, " "),
        Piece::InlineCode(t) => write!(out, "{}", t.bold()),
        Piece::BlockHeader(t) => write!(out, "{}", t.cyan().bold()),
        Piece::Code(t) => write!(out, "  {}", t.green()),
    }
}
