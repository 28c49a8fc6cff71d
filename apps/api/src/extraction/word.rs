use docx_rs::{
    DocumentChild, InsertChild, MoveToChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild, TableRowChild,
};

use super::ExtractionError;

/// Raw text of a WordprocessingML container, formatting discarded.
///
/// Every non-empty paragraph (including those inside table cells and content
/// controls) becomes one block; blocks are separated by a blank line. Tracked
/// insertions and move targets are kept, tracked deletions are dropped.
pub(super) fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Word(e.to_string()))?;

    let mut blocks: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_block(&mut blocks, paragraph_text(paragraph)),
            DocumentChild::Table(table) => collect_table(&mut blocks, table),
            DocumentChild::StructuredDataTag(sdt) => collect_sdt_blocks(&mut blocks, sdt),
            _ => {}
        }
    }

    Ok(blocks.join("\n\n"))
}

fn push_block(blocks: &mut Vec<String>, text: String) {
    if !text.trim().is_empty() {
        blocks.push(text);
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut content = String::new();
    collect_runs(&mut content, &paragraph.children);
    content
}

fn collect_runs(content: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(content, run),
            ParagraphChild::Hyperlink(link) => collect_runs(content, &link.children),
            ParagraphChild::Insert(insert) => {
                for c in &insert.children {
                    if let InsertChild::Run(run) = c {
                        push_run(content, run);
                    }
                }
            }
            ParagraphChild::MoveTo(move_to) => {
                for c in &move_to.children {
                    if let MoveToChild::Run(run) = c {
                        push_run(content, run);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(sdt) => collect_sdt_inline(content, sdt),
            // Delete / MoveFrom hold text that is no longer in the document.
            _ => {}
        }
    }
}

fn push_run(content: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(text) => content.push_str(&text.text),
            RunChild::Tab(_) => content.push('\t'),
            RunChild::Break(_) => content.push('\n'),
            _ => {}
        }
    }
}

/// Inline content control: its runs continue the surrounding paragraph.
fn collect_sdt_inline(content: &mut String, sdt: &StructuredDataTag) {
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(content, run),
            StructuredDataTagChild::Paragraph(paragraph) => {
                content.push_str(&paragraph_text(paragraph))
            }
            StructuredDataTagChild::StructuredDataTag(nested) => collect_sdt_inline(content, nested),
            _ => {}
        }
    }
}

/// Block-level content control: paragraphs and tables become their own blocks,
/// loose runs are gathered into one.
fn collect_sdt_blocks(blocks: &mut Vec<String>, sdt: &StructuredDataTag) {
    let mut loose = String::new();
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(&mut loose, run),
            StructuredDataTagChild::Paragraph(paragraph) => {
                push_block(blocks, paragraph_text(paragraph))
            }
            StructuredDataTagChild::Table(table) => collect_table(blocks, table),
            StructuredDataTagChild::StructuredDataTag(nested) => collect_sdt_blocks(blocks, nested),
            _ => {}
        }
    }
    push_block(blocks, loose);
}

fn collect_table(blocks: &mut Vec<String>, table: &Table) {
    for table_child in &table.rows {
        let TableChild::TableRow(row) = table_child;
        for row_child in &row.cells {
            let TableRowChild::TableCell(cell) = row_child;
            for cell_child in &cell.children {
                match cell_child {
                    TableCellContent::Paragraph(paragraph) => {
                        push_block(blocks, paragraph_text(paragraph))
                    }
                    TableCellContent::Table(nested) => collect_table(blocks, nested),
                    TableCellContent::StructuredDataTag(sdt) => collect_sdt_blocks(blocks, sdt),
                    _ => {}
                }
            }
        }
    }
}
