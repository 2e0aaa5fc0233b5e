// A single FastA record: an identifier, a free-text description and a raw sequence. Both
// identifier and description are kept verbatim; the identifier is whatever precedes the first
// space of the header line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl SeqRecord {
    /// Header line without the leading '>'.
    pub fn header(&self) -> String {
        format!("{} {}", self.id, self.description)
    }

    pub fn from_header(header: &str, sequence: String) -> SeqRecord {
        let (id, description) = header.split_once(' ').unwrap_or((header, ""));
        SeqRecord {
            id: id.to_string(),
            description: description.to_string(),
            sequence,
        }
    }
}
