//! OBJ file loader for 3D models

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use futures::future::{FutureExt, LocalBoxFuture};

use super::{AssetError, AssetLoader, LoadProgress, ProgressCallback};
use crate::render::{Material, Mesh};
use crate::scene::SceneNode;

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Loads Wavefront OBJ models (plus side-by-side MTL files) from disk
///
/// Relative paths are tried against each search path in order; the first
/// existing file wins. The result is a group node named after the file with
/// one mesh child per OBJ object.
#[derive(Debug, Clone)]
pub struct ObjLoader {
    search_paths: Vec<PathBuf>,
    chunk_size: usize,
}

impl Default for ObjLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjLoader {
    /// Loader searching `assets/` and then the working directory
    pub fn new() -> Self {
        Self {
            search_paths: vec![PathBuf::from("assets"), PathBuf::from(".")],
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Loader searching only the given root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            search_paths: vec![root.into()],
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Add a search path tried after the existing ones
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Read granularity, which is also the progress reporting granularity
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        self.search_paths
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    fn read_with_progress<'p>(
        &self,
        path: &Path,
        mut progress: Option<&mut (dyn FnMut(LoadProgress) + 'p)>,
    ) -> Result<Vec<u8>, AssetError> {
        let mut file = File::open(path)?;
        let total = file.metadata()?.len();
        let mut bytes = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
        let mut chunk = vec![0u8; self.chunk_size];

        loop {
            let read = file.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..read]);
            if let Some(report) = progress.as_deref_mut() {
                report(LoadProgress {
                    loaded: bytes.len() as u64,
                    total,
                });
            }
        }

        Ok(bytes)
    }

    fn parse(path: &Path, bytes: &[u8]) -> Result<SceneNode, AssetError> {
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };

        let (models, materials) = tobj::load_obj_buf(&mut Cursor::new(bytes), &options, |mtl| {
            tobj::load_mtl(base_dir.join(mtl))
        })
        .map_err(|e| AssetError::Parse(format!("{}: {}", path.display(), e)))?;

        let materials = materials.unwrap_or_else(|e| {
            log::warn!("No usable MTL for {}: {}", path.display(), e);
            Vec::new()
        });

        // tobj always emits a trailing model, even for a file without faces
        let models: Vec<_> = models
            .into_iter()
            .filter(|m| !m.mesh.indices.is_empty())
            .collect();
        if models.is_empty() {
            return Err(AssetError::Empty(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map_or_else(|| "model".to_string(), |s| s.to_string_lossy().into_owned());
        let mut root = SceneNode::group(name);

        for model in &models {
            let mesh = &model.mesh;
            let material = mesh
                .material_id
                .and_then(|id| materials.get(id))
                .map(convert_material)
                .unwrap_or_default();
            let geometry = Mesh::from_flat(
                &mesh.positions,
                &mesh.normals,
                &mesh.texcoords,
                mesh.indices.clone(),
            );

            log::debug!(
                "  {}: {} vertices, {} triangles, material '{}'",
                model.name,
                geometry.vertices.len(),
                geometry.triangle_count(),
                material.name
            );
            root.add_child(SceneNode::mesh(model.name.clone(), geometry, material));
        }

        log::info!(
            "Loaded {} ({} meshes, {} materials)",
            path.display(),
            models.len(),
            materials.len()
        );
        Ok(root)
    }
}

fn convert_material(mtl: &tobj::Material) -> Material {
    let [r, g, b] = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
    let alpha = mtl.dissolve.unwrap_or(1.0);
    let material = Material::new()
        .with_name(mtl.name.clone())
        .with_color(r, g, b);
    if alpha < 1.0 {
        material.translucent(alpha)
    } else {
        material
    }
}

impl AssetLoader for ObjLoader {
    fn load<'a>(
        &'a self,
        path: &'a str,
        mut progress: Option<ProgressCallback<'a>>,
    ) -> LocalBoxFuture<'a, Result<SceneNode, AssetError>> {
        async move {
            let full_path = self.resolve(path)?;
            log::info!("Loading model {} from {}", path, full_path.display());
            let bytes = self.read_with_progress(&full_path, progress.as_deref_mut())?;
            Self::parse(&full_path, &bytes)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const TRIANGLE_OBJ: &str = "\
mtllib tri.mtl
o tri
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
usemtl wax
f 1 2 3
";

    const TRIANGLE_MTL: &str = "\
newmtl wax
Kd 0.9 0.85 0.7
d 1.0
";

    fn write_fixture(dir: &Path) {
        std::fs::create_dir_all(dir.join("models")).unwrap();
        std::fs::write(dir.join("models/tri.obj"), TRIANGLE_OBJ).unwrap();
        std::fs::write(dir.join("models/tri.mtl"), TRIANGLE_MTL).unwrap();
    }

    #[test]
    fn test_loads_mesh_and_material() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let loader = ObjLoader::with_root(dir.path());

        let root = block_on(loader.load("models/tri.obj", None)).unwrap();
        assert_eq!(root.name, "tri");
        assert_eq!(root.children.len(), 1);

        let mesh = root.child(0).unwrap().as_mesh().unwrap();
        assert_eq!(mesh.mesh.triangle_count(), 1);
        assert_eq!(mesh.material.name, "wax");
        assert_eq!(mesh.material.base_color, [0.9, 0.85, 0.7]);
        assert!(!mesh.material.transparent);
        // Normals were absent from the file and are generated
        assert_eq!(mesh.mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_progress_reaches_total() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let loader = ObjLoader::with_root(dir.path()).with_chunk_size(16);

        let mut reports = Vec::new();
        let mut record = |p: LoadProgress| reports.push(p);
        block_on(loader.load("models/tri.obj", Some(&mut record))).unwrap();

        assert!(reports.len() > 1);
        let last = reports.last().unwrap();
        assert_eq!(last.loaded, TRIANGLE_OBJ.len() as u64);
        assert_eq!(last.fraction(), Some(1.0));
        assert!(reports.windows(2).all(|w| w[0].loaded < w[1].loaded));
    }

    #[test]
    fn test_search_paths_are_tried_in_order() {
        let empty = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let mut loader = ObjLoader::with_root(empty.path());
        loader.add_search_path(dir.path());
        assert!(block_on(loader.load("models/tri.obj", None)).is_ok());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ObjLoader::with_root(dir.path());
        let err = block_on(loader.load("models/absent.obj", None)).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(p) if p == "models/absent.obj"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.obj"), "v 1.0 nope 2.0\n").unwrap();
        let loader = ObjLoader::with_root(dir.path());
        let err = block_on(loader.load("bad.obj", None)).unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }

    #[test]
    fn test_file_without_objects_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blank.obj"), "# nothing here\n").unwrap();
        let loader = ObjLoader::with_root(dir.path());
        let err = block_on(loader.load("blank.obj", None)).unwrap_err();
        assert!(matches!(err, AssetError::Empty(_)));
    }

    #[test]
    fn test_translucent_mtl_becomes_transparent_material() {
        let mtl = tobj::Material {
            name: "glass".to_string(),
            diffuse: Some([0.2, 0.3, 0.4]),
            dissolve: Some(0.5),
            ..Default::default()
        };
        let material = convert_material(&mtl);
        assert!(material.transparent);
        assert_eq!(material.alpha, 0.5);
    }
}
