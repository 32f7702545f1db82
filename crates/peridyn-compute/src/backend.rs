//! Compute backend trait and its implementations.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use peridyn_math::Vec3;
use peridyn_types::{PeridynError, PeridynResult};

/// Per-node kernel producing a scalar.
pub type ScalarKernel<'k> = dyn Fn(usize) -> f64 + Sync + 'k;

/// Per-node kernel producing a 3D vector.
pub type VectorKernel<'k> = dyn Fn(usize) -> Vec3 + Sync + 'k;

/// Trait for per-node dispatch backends.
///
/// `dispatch_*` calls `kernel(i)` exactly once for every `i` in
/// `0..out.len()` and stores the result in `out[i]`. Kernels only read
/// shared data, and each output slot is written by exactly one call, so
/// no implementation needs locks.
///
/// # Implementations
/// - [`SerialBackend`] — Sequential reference
/// - [`RayonBackend`] — Parallel on a private rayon pool
pub trait ComputeBackend: Send + Sync {
    /// Returns the backend name (e.g., "serial", "rayon").
    fn name(&self) -> &str;

    /// Fill `out[i] = kernel(i)` for a scalar kernel.
    fn dispatch_scalar(&self, out: &mut [f64], kernel: &ScalarKernel<'_>);

    /// Fill `out[i] = kernel(i)` for a vector kernel.
    fn dispatch_vector(&self, out: &mut [Vec3], kernel: &VectorKernel<'_>);

    /// Run two independent jobs, concurrently if the backend can.
    fn join(&self, a: &mut (dyn FnMut() + Send), b: &mut (dyn FnMut() + Send));

    /// Number of worker threads (1 for serial).
    fn thread_count(&self) -> usize;

    /// Returns true if dispatches may run on several threads.
    fn is_parallel(&self) -> bool {
        self.thread_count() > 1
    }
}

/// Which backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// In-order loop on the calling thread.
    Serial,
    /// Rayon thread pool.
    #[default]
    Rayon,
}

impl BackendKind {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Serial => "serial",
            BackendKind::Rayon => "rayon",
        }
    }
}

/// Builds a boxed backend of the given kind.
///
/// `threads` and `min_chunk_len` only affect [`BackendKind::Rayon`];
/// `threads = None` lets rayon pick one thread per core.
pub fn create_backend(
    kind: BackendKind,
    threads: Option<usize>,
    min_chunk_len: usize,
) -> PeridynResult<Box<dyn ComputeBackend>> {
    let backend: Box<dyn ComputeBackend> = match kind {
        BackendKind::Serial => Box::new(SerialBackend::new()),
        BackendKind::Rayon => Box::new(RayonBackend::new(threads, min_chunk_len)?),
    };
    tracing::debug!(
        backend = backend.name(),
        threads = backend.thread_count(),
        "compute backend ready"
    );
    Ok(backend)
}

/// Sequential reference backend.
///
/// Used for:
/// - Correctness validation (parallel results must match it bit for bit)
/// - Small problems where thread wake-up costs more than the work
/// - Deterministic debugging
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl SerialBackend {
    /// Creates a serial backend.
    pub fn new() -> Self {
        Self
    }
}

impl ComputeBackend for SerialBackend {
    fn name(&self) -> &str {
        "serial"
    }

    fn dispatch_scalar(&self, out: &mut [f64], kernel: &ScalarKernel<'_>) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = kernel(i);
        }
    }

    fn dispatch_vector(&self, out: &mut [Vec3], kernel: &VectorKernel<'_>) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = kernel(i);
        }
    }

    fn join(&self, a: &mut (dyn FnMut() + Send), b: &mut (dyn FnMut() + Send)) {
        a();
        b();
    }

    fn thread_count(&self) -> usize {
        1
    }
}

/// Parallel backend on a dedicated rayon thread pool.
///
/// Output slices are split with `par_iter_mut`, so every worker owns a
/// disjoint range of slots. `min_chunk_len` bounds how finely the range
/// is split.
pub struct RayonBackend {
    pool: rayon::ThreadPool,
    min_chunk_len: usize,
}

impl RayonBackend {
    /// Builds a pool with `threads` workers (`None` = one per core).
    pub fn new(threads: Option<usize>, min_chunk_len: usize) -> PeridynResult<Self> {
        if threads == Some(0) {
            return Err(PeridynError::Backend(
                "Rayon backend needs at least one thread".into(),
            ));
        }

        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("peridyn-worker-{i}"));
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder
            .build()
            .map_err(|e| PeridynError::Backend(format!("Failed to build thread pool: {e}")))?;

        Ok(Self {
            pool,
            min_chunk_len: min_chunk_len.max(1),
        })
    }

    /// Minimum number of nodes per rayon task.
    pub fn min_chunk_len(&self) -> usize {
        self.min_chunk_len
    }
}

impl std::fmt::Debug for RayonBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayonBackend")
            .field("threads", &self.pool.current_num_threads())
            .field("min_chunk_len", &self.min_chunk_len)
            .finish()
    }
}

impl ComputeBackend for RayonBackend {
    fn name(&self) -> &str {
        "rayon"
    }

    fn dispatch_scalar(&self, out: &mut [f64], kernel: &ScalarKernel<'_>) {
        let min_len = self.min_chunk_len;
        self.pool.install(|| {
            out.par_iter_mut()
                .enumerate()
                .with_min_len(min_len)
                .for_each(|(i, slot)| *slot = kernel(i));
        });
    }

    fn dispatch_vector(&self, out: &mut [Vec3], kernel: &VectorKernel<'_>) {
        let min_len = self.min_chunk_len;
        self.pool.install(|| {
            out.par_iter_mut()
                .enumerate()
                .with_min_len(min_len)
                .for_each(|(i, slot)| *slot = kernel(i));
        });
    }

    fn join(&self, a: &mut (dyn FnMut() + Send), b: &mut (dyn FnMut() + Send)) {
        self.pool.install(|| {
            rayon::join(|| a(), || b());
        });
    }

    fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}
