//! Hint matrix cache
//!
//! The matrix is a pure function of the guess and solution lists, so it can be
//! persisted and reloaded. An artifact is only valid for the exact lists it was
//! built from: the [`CacheKey`] fingerprints both lists, and the key is stored
//! inside the artifact and checked again on load. Any failure on the read side
//! falls back to a rebuild.

use super::HintMatrix;
use crate::core::{SolutionSet, Word};
use crate::error::{Result, SolverError};
use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Mutex;

/// Bumped whenever the serialized layout of [`HintMatrix`] changes
const FORMAT_VERSION: u32 = 1;

/// Identity of the inputs a matrix was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    version: u32,
    guesses: usize,
    solutions: usize,
    fingerprint: u64,
}

impl CacheKey {
    /// Fingerprint a guess list and solution set
    ///
    /// Guess order and duplicates do not change the key.
    #[must_use]
    pub fn new(guesses: &[Word], solutions: &SolutionSet) -> Self {
        let mut sorted = guesses.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut hasher = FxHasher::default();
        FORMAT_VERSION.hash(&mut hasher);
        sorted.hash(&mut hasher);
        solutions.hash(&mut hasher);

        Self {
            version: FORMAT_VERSION,
            guesses: sorted.len(),
            solutions: solutions.len(),
            fingerprint: hasher.finish(),
        }
    }

    /// File name used by [`FsCacheStore`]
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{self}.bin")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hint-matrix-v{}-{}x{}-{:016x}",
            self.version, self.guesses, self.solutions, self.fingerprint
        )
    }
}

/// Byte storage for cache artifacts
///
/// The store knows nothing about the format; it only keeps bytes by key.
pub trait CacheStore: Send + Sync {
    /// Fetch the artifact for `key`, or `None` if there is none
    ///
    /// # Errors
    /// Any I/O failure reading an artifact that exists.
    fn load(&self, key: &CacheKey) -> Result<Option<Vec<u8>>>;

    /// Persist the artifact for `key`, replacing any previous one
    ///
    /// # Errors
    /// Any I/O failure writing the artifact.
    fn store(&self, key: &CacheKey, bytes: &[u8]) -> Result<()>;
}

/// One file per key in a directory
#[derive(Debug, Clone)]
pub struct FsCacheStore {
    dir: PathBuf,
}

impl FsCacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where the artifact for `key` lives
    #[must_use]
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl CacheStore for FsCacheStore {
    fn load(&self, key: &CacheKey) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, key: &CacheKey, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // readers never observe a half-written artifact
        let partial = path.with_extension("partial");
        fs::write(&partial, bytes)?;
        fs::rename(&partial, &path)?;
        Ok(())
    }
}

/// Process-local store, for tests and runs without a cache directory
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: Mutex<FxHashMap<CacheKey, Vec<u8>>>,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored artifacts
    ///
    /// # Panics
    /// Panics if another thread panicked while holding the lock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self, key: &CacheKey) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SolverError::Cache("cache lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &CacheKey, bytes: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SolverError::Cache("cache lock poisoned".into()))?;
        entries.insert(*key, bytes.to_vec());
        Ok(())
    }
}

/// How [`load_or_build`] obtained its matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Deserialized a valid artifact
    Hit,
    /// No artifact existed; built and stored
    Miss,
    /// An artifact existed but was unreadable, corrupt, or for other lists
    Rebuilt,
}

#[derive(Serialize)]
struct ArtifactRef<'a> {
    key: &'a CacheKey,
    matrix: &'a HintMatrix,
}

#[derive(Deserialize)]
struct Artifact {
    key: CacheKey,
    matrix: HintMatrix,
}

/// Encode a matrix together with the key it was built for
///
/// # Errors
/// `Cache` if serialization fails.
pub fn encode(key: &CacheKey, matrix: &HintMatrix) -> Result<Vec<u8>> {
    bincode::serialize(&ArtifactRef { key, matrix }).map_err(|e| SolverError::Cache(e.to_string()))
}

/// Decode an artifact, rejecting one built for a different key
///
/// Only the key is checked here; [`load_or_build`] also validates the matrix
/// against the lists it was asked for.
///
/// # Errors
/// `Cache` if the bytes are corrupt or the embedded key differs from `key`.
pub fn decode(key: &CacheKey, bytes: &[u8]) -> Result<HintMatrix> {
    let artifact: Artifact =
        bincode::deserialize(bytes).map_err(|e| SolverError::Cache(e.to_string()))?;
    if artifact.key != *key {
        return Err(SolverError::Cache(format!(
            "artifact was built for {}, expected {key}",
            artifact.key
        )));
    }
    Ok(artifact.matrix)
}

/// Load the matrix for these lists from `store`, or build and store it
///
/// Read-side failures degrade to a rebuild; a failed write is logged and the
/// freshly built matrix is still returned.
///
/// # Examples
/// ```
/// use wordle_hints::core::{SolutionSet, Word};
/// use wordle_hints::hints::{CacheStatus, MemoryCacheStore, load_or_build};
///
/// let guesses: Vec<Word> = ["gator", "rotor"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let solutions: SolutionSet = guesses.iter().copied().collect();
/// let store = MemoryCacheStore::new();
///
/// let (first, status) = load_or_build(&store, &guesses, &solutions);
/// assert_eq!(status, CacheStatus::Miss);
///
/// let (second, status) = load_or_build(&store, &guesses, &solutions);
/// assert_eq!(status, CacheStatus::Hit);
/// assert_eq!(first, second);
/// ```
pub fn load_or_build(
    store: &dyn CacheStore,
    guesses: &[Word],
    solutions: &SolutionSet,
) -> (HintMatrix, CacheStatus) {
    let key = CacheKey::new(guesses, solutions);

    let status = match store.load(&key) {
        Ok(Some(bytes)) => match decode(&key, &bytes)
            .and_then(|matrix| matrix.validate(guesses, solutions).map(|()| matrix))
        {
            Ok(matrix) => {
                info!("loaded hint matrix from cache ({key})");
                return (matrix, CacheStatus::Hit);
            }
            Err(e) => {
                warn!("discarding cached hint matrix: {e}");
                CacheStatus::Rebuilt
            }
        },
        Ok(None) => {
            debug!("no cached hint matrix for {key}");
            CacheStatus::Miss
        }
        Err(e) => {
            warn!("could not read cached hint matrix: {e}");
            CacheStatus::Rebuilt
        }
    };

    info!(
        "building hint matrix for {} guesses x {} solutions",
        guesses.len(),
        solutions.len()
    );
    let matrix = HintMatrix::build(guesses, solutions);

    match encode(&key, &matrix).and_then(|bytes| store.store(&key, &bytes)) {
        Ok(()) => debug!("stored hint matrix as {key}"),
        Err(e) => warn!("could not store hint matrix: {e}"),
    }

    (matrix, status)
}
