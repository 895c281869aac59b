use super::error::{Error, SourceError};
use super::geo::Location;
use super::items::{Element, Member, Node, Relation, Way};
use super::tags::TagMap;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, Seek, SeekFrom};

enum Markup {
    /// An element start, `true` if it is self-closing.
    Open(Element, bool),
    Nd(i64),
    Tag(String, String),
    Close,
    Eof,
    Skip,
}

/// Streams the elements of an OSM XML document in document order.
///
/// Only the positions of `wanted` nodes are kept, so memory follows the
/// number of interesting way members rather than the size of the document.
/// References to nodes which have not been seen stay unresolved.
pub struct XmlElements<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    wanted: HashSet<i64>,
    index: HashMap<i64, Location>,
    pending: Option<Element>,
    done: bool,
}

impl<R: BufRead + Seek> XmlElements<R> {
    /// Makes a first pass over the document to find the nodes of ways with
    /// wanted tags, then rewinds for the element stream.
    pub fn open<F>(mut input: R, wants: F) -> Result<Self, Error>
    where
        F: Fn(&TagMap) -> bool,
    {
        let mut wanted = HashSet::new();
        for element in XmlElements::new(&mut input, HashSet::new()) {
            let element = element?;
            if let Element::Way(way) = &element {
                if wants(&TagMap::from(&element)) {
                    wanted.extend(way.members.iter().map(|member| member.id));
                }
            }
        }
        input.seek(SeekFrom::Start(0))?;
        debug!("{} way nodes need a position", wanted.len());
        Ok(XmlElements::new(input, wanted))
    }
}

impl<R: BufRead> XmlElements<R> {
    pub fn new(input: R, wanted: HashSet<i64>) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.trim_text(true);
        XmlElements {
            reader,
            buf: Vec::new(),
            wanted,
            index: HashMap::new(),
            pending: None,
            done: false,
        }
    }

    fn read_markup(&mut self) -> Result<Markup, SourceError> {
        self.buf.clear();
        let markup = match self.reader.read_event_into(&mut self.buf)? {
            Event::Start(e) => markup(&e, false)?,
            Event::Empty(e) => markup(&e, true)?,
            Event::End(e) => match e.name().as_ref() {
                b"node" | b"way" | b"relation" => Markup::Close,
                _ => Markup::Skip,
            },
            Event::Eof => Markup::Eof,
            _ => Markup::Skip,
        };
        Ok(markup)
    }

    fn advance(&mut self) -> Result<Option<Element>, SourceError> {
        loop {
            match self.read_markup()? {
                Markup::Open(element, empty) => {
                    if let Element::Node(Node {
                        id,
                        location: Some(location),
                        ..
                    }) = &element
                    {
                        if self.wanted.contains(id) {
                            self.index.insert(*id, *location);
                        }
                    }
                    if empty {
                        return Ok(Some(element));
                    }
                    self.pending = Some(element);
                }
                Markup::Nd(id) => {
                    if let Some(Element::Way(way)) = self.pending.as_mut() {
                        let location = self.index.get(&id).copied();
                        way.members.push(Member { id, location });
                    }
                }
                Markup::Tag(key, value) => {
                    if let Some(element) = self.pending.as_mut() {
                        element
                            .tags_mut()
                            .push((key.as_str().into(), value.as_str().into()));
                    }
                }
                Markup::Close => {
                    if let Some(element) = self.pending.take() {
                        return Ok(Some(element));
                    }
                }
                Markup::Eof => return Ok(None),
                Markup::Skip => (),
            }
        }
    }
}

impl<R: BufRead> Iterator for XmlElements<R> {
    type Item = Result<Element, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err.into()))
            }
        }
    }
}

fn attr(e: &BytesStart, key: &[u8]) -> Result<Option<String>, SourceError> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required(e: &BytesStart, key: &[u8]) -> Result<String, SourceError> {
    attr(e, key)?.ok_or_else(|| SourceError::MissingAttribute {
        element: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        attribute: String::from_utf8_lossy(key).into_owned(),
    })
}

fn id(e: &BytesStart) -> Result<i64, SourceError> {
    Ok(required(e, b"id")?.parse()?)
}

fn markup(e: &BytesStart, empty: bool) -> Result<Markup, SourceError> {
    let markup = match e.name().as_ref() {
        b"node" => {
            let location = match (attr(e, b"lat")?, attr(e, b"lon")?) {
                (Some(lat), Some(lon)) => Location::new(lat.parse()?, lon.parse()?),
                _ => None,
            };
            let node = Node {
                id: id(e)?,
                tags: Vec::new(),
                location,
            };
            Markup::Open(Element::Node(node), empty)
        }
        b"way" => {
            let way = Way {
                id: id(e)?,
                tags: Vec::new(),
                members: Vec::new(),
            };
            Markup::Open(Element::Way(way), empty)
        }
        b"relation" => {
            let rel = Relation {
                id: id(e)?,
                tags: Vec::new(),
            };
            Markup::Open(Element::Relation(rel), empty)
        }
        b"nd" => Markup::Nd(required(e, b"ref")?.parse()?),
        b"tag" => match (attr(e, b"k")?, attr(e, b"v")?) {
            (Some(key), Some(value)) => Markup::Tag(key, value),
            _ => Markup::Skip,
        },
        _ => Markup::Skip,
    };
    Ok(markup)
}
