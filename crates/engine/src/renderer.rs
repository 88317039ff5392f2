//! Renderer seam between the driver and any frontend.

use std::convert::Infallible;
use std::io::{self, Write};

use blockfall_core::GameSnapshot;

/// Something that can present a game snapshot.
///
/// Called by the driver after every state change, on the driver's task.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error> {
        (**self).render(snapshot)
    }
}

/// Collects every frame; handy for tests and replays.
impl Renderer for Vec<GameSnapshot> {
    type Error = Infallible;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Writes one JSON object per frame, newline separated.
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
