//! REPL session state
//!
//! Holds everything that survives between commands: the API client, the map
//! cursor, the caught creatures and the RNG used for catch rolls.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::api::{Fetch, PokeApiClient};
use crate::error::Result;
use crate::models::Pokemon;
use crate::pokedex::{attempt_catch, Pokedex};
use crate::repl::command::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Pager ==
/// Offset bookkeeping for `map` / `mapb`.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: u32,
    /// Offset of the page last shown, None before the first `map`
    current: Option<u32>,
    /// The page last shown reported no successor
    at_last_page: bool,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            current: None,
            at_last_page: false,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// Offset `map` should request, or None when already on the last page.
    ///
    /// An offset past `u32::MAX` counts as the last page.
    pub fn next_offset(&self) -> Option<u32> {
        match self.current {
            None => Some(0),
            Some(_) if self.at_last_page => None,
            Some(offset) => offset.checked_add(self.page_size),
        }
    }

    /// Offset `mapb` should request, or None when on (or before) the first page.
    pub fn previous_offset(&self) -> Option<u32> {
        self.current
            .and_then(|offset| offset.checked_sub(self.page_size))
    }

    /// Records that the page at `offset` was shown.
    pub fn show(&mut self, offset: u32, has_next: bool) {
        self.current = Some(offset);
        self.at_last_page = !has_next;
    }
}

// == Session ==
/// State of one interactive session.
pub struct Session<F> {
    client: PokeApiClient<F>,
    pager: Pager,
    pokedex: Pokedex,
    rng: Box<dyn RngCore + Send>,
}

impl<F: Fetch> Session<F> {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient<F>, page_size: u32) -> Self {
        Self::with_rng(client, page_size, Box::new(StdRng::from_entropy()))
    }

    /// Creates a session that rolls catches with `rng`.
    pub fn with_rng(client: PokeApiClient<F>, page_size: u32, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            client,
            pager: Pager::new(page_size),
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient<F> {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W>(&mut self, command: Command, out: &mut W) -> Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        match command {
            Command::Help => self.help(out).await?,
            Command::Exit => {
                say(out, "Closing the Pokedex... Goodbye!").await?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_forward(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out).await?,
            Command::Pokedex => self.list_pokedex(out).await?,
        }

        Ok(Flow::Continue)
    }

    async fn help<W: AsyncWrite + Unpin>(&self, out: &mut W) -> Result<()> {
        say(out, "Welcome to the Pokedex!\nUsage:\n").await?;
        for info in COMMANDS {
            say(out, &format!("{}: {}", info.usage, info.description)).await?;
        }
        Ok(())
    }

    async fn map_forward<W: AsyncWrite + Unpin>(&mut self, out: &mut W) -> Result<()> {
        let Some(offset) = self.pager.next_offset() else {
            return say(out, "you're on the last page").await;
        };
        self.show_page(offset, out).await
    }

    async fn map_back<W: AsyncWrite + Unpin>(&mut self, out: &mut W) -> Result<()> {
        let Some(offset) = self.pager.previous_offset() else {
            return say(out, "you're on the first page").await;
        };
        self.show_page(offset, out).await
    }

    async fn show_page<W: AsyncWrite + Unpin>(&mut self, offset: u32, out: &mut W) -> Result<()> {
        let page = self
            .client
            .location_areas(offset, self.pager.page_size())
            .await?;

        // Only move the cursor once the page actually loaded
        self.pager.show(offset, page.has_next());

        for area in &page.results {
            say(out, &area.name).await?;
        }
        Ok(())
    }

    async fn explore<W: AsyncWrite + Unpin>(&self, area: &str, out: &mut W) -> Result<()> {
        say(out, &format!("Exploring {}...", area)).await?;
        let location = self.client.location_area(area).await?;

        say(out, "Found Pokemon:").await?;
        for name in location.pokemon_names() {
            say(out, &format!(" - {}", name)).await?;
        }
        Ok(())
    }

    async fn catch<W: AsyncWrite + Unpin>(&mut self, name: &str, out: &mut W) -> Result<()> {
        say(out, &format!("Throwing a Pokeball at {}...", name)).await?;
        let pokemon = self.client.pokemon(name).await?;

        if attempt_catch(&pokemon, self.rng.as_mut()) {
            info!("Caught {} (base experience {:?})", name, pokemon.base_experience);
            say(out, &format!("{} was caught!", name)).await?;
            say(out, "You may now inspect it with the inspect command").await?;
            self.pokedex.insert(pokemon);
        } else {
            say(out, &format!("{} escaped!", name)).await?;
        }
        Ok(())
    }

    async fn inspect<W: AsyncWrite + Unpin>(&self, name: &str, out: &mut W) -> Result<()> {
        match self.pokedex.get(name) {
            Some(pokemon) => say(out, &describe(pokemon)).await,
            None => say(out, "you have not caught that pokemon").await,
        }
    }

    async fn list_pokedex<W: AsyncWrite + Unpin>(&self, out: &mut W) -> Result<()> {
        say(out, "Your Pokedex:").await?;
        for pokemon in self.pokedex.iter() {
            say(out, &format!(" - {}", pokemon.name)).await?;
        }
        Ok(())
    }
}

/// Multi-line summary printed by `inspect`.
pub fn describe(pokemon: &Pokemon) -> String {
    let mut text = format!(
        "Name: {}\nHeight: {}\nWeight: {}\nStats:",
        pokemon.name, pokemon.height, pokemon.weight
    );
    for stat in &pokemon.stats {
        text.push_str(&format!("\n  -{}: {}", stat.stat.name, stat.base_stat));
    }
    text.push_str("\nTypes:");
    for kind in &pokemon.types {
        text.push_str(&format!("\n  - {}", kind.kind.name));
    }
    text
}

/// Writes `text` and a newline.
pub(crate) async fn say<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
