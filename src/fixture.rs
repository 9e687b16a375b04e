use super::*;

//
// Params
//

pub struct Params {
    pub ray_count: u32,
    pub triangle_count: u32,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub hit_file_name: &'static str,
    pub miss_file_name: &'static str,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            ray_count: 100,
            triangle_count: 400,
            seed: None,
            output_dir: PathBuf::from("."),
            hit_file_name: "hit_tests.yml",
            miss_file_name: "miss_tests.yml",
        }
    }
}

impl Params {
    pub fn hit_path(&self) -> PathBuf {
        self.output_dir.join(self.hit_file_name)
    }

    pub fn miss_path(&self) -> PathBuf {
        self.output_dir.join(self.miss_file_name)
    }
}

//
// Records
//

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TriangleRecord {
    pub v0: [f64; 3],
    pub v1: [f64; 3],
    pub v2: [f64; 3],
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RayRecord {
    pub position: [f64; 3],
    pub direction: [f64; 3],
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub triangle: TriangleRecord,
    pub ray: RayRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit: Option<Hit>,
}

impl Record {
    pub fn new(triangle: &Triangle, ray: &Ray, hit: Option<Hit>) -> Self {
        Self {
            triangle: TriangleRecord {
                v0: point_to_array(&triangle.positions[0]),
                v1: point_to_array(&triangle.positions[1]),
                v2: point_to_array(&triangle.positions[2]),
            },
            ray: RayRecord {
                position: point_to_array(&ray.origin),
                direction: normal_to_array(&ray.dir),
            },
            hit,
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::new(
            point_from_array(self.triangle.v0),
            point_from_array(self.triangle.v1),
            point_from_array(self.triangle.v2),
        )
    }

    pub fn ray(&self) -> Ray {
        Ray {
            origin: point_from_array(self.ray.position),
            dir: normal_from_array(self.ray.direction),
        }
    }
}

//
// Generation
//

pub struct Fixtures {
    pub hits: Vec<Record>,
    pub misses: Vec<Record>,
}

impl Fixtures {
    pub fn generate(params: &Params, uniform: &mut UniformSampler) -> Self {
        let triangles = (0..params.triangle_count)
            .map(|_| random_triangle(uniform))
            .collect::<Vec<_>>();
        debug!("Generated {} triangles", triangles.len());

        let mut hits = vec![];
        let mut misses = vec![];
        for ray_index in 0..params.ray_count {
            let ray = random_ray(uniform);
            let hit_count = hits.len();
            for triangle in &triangles {
                let hit = ray_triangle_hit(&ray, triangle);
                trace!("ray={ray_index} hit={hit:?}");
                let record = Record::new(triangle, &ray, hit);
                if hit.is_some() {
                    hits.push(record);
                } else {
                    misses.push(record);
                }
            }
            debug!("Ray {ray_index} hit {} triangles", hits.len() - hit_count);
        }

        Self { hits, misses }
    }

    /// Misses truncated to the hit count, or all of them if there are fewer.
    pub fn balanced_misses(&self) -> &[Record] {
        let count = self.hits.len().min(self.misses.len());
        &self.misses[..count]
    }
}

//
// Verification
//

pub fn verify(records: &[Record], expect_hit: bool) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        ensure!(
            record.hit.is_some() == expect_hit,
            "Record {index} is in the wrong file, expected hit={expect_hit}"
        );
        let hit = ray_triangle_hit(&record.ray(), &record.triangle());
        match (hit, record.hit) {
            (Some(hit), Some(expected)) => {
                ensure!(
                    approx::relative_eq!(hit.dist, expected.dist, max_relative = 1e-9)
                        && approx::relative_eq!(hit.u, expected.u, max_relative = 1e-9)
                        && approx::relative_eq!(hit.v, expected.v, max_relative = 1e-9),
                    "Record {index} hit mismatch, got {hit:?}, expected {expected:?}"
                );
            }
            (None, None) => {}
            (hit, expected) => {
                bail!("Record {index} classification mismatch, got {hit:?}, expected {expected:?}");
            }
        }
    }
    Ok(())
}

//
// Files
//

pub fn read_from_file<P>(path: P) -> Result<Vec<Record>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Opening {}", path.display()))?;
    serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("Parsing {}", path.display()))
}

pub fn write_to_file<P>(path: P, records: &[Record]) -> Result<()>
where
    P: AsRef<Path>,
{
    use std::io::Write;

    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_yaml::to_writer(&mut writer, records)
        .with_context(|| format!("Serializing {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

//
// Runner
//

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Summary {
    pub tests: usize,
    pub hits: usize,
    pub misses: usize,
    pub hits_written: usize,
    pub misses_written: usize,
}

impl Summary {
    pub fn hit_percentage(&self) -> f64 {
        percentage(self.hits, self.tests)
    }

    pub fn miss_percentage(&self) -> f64 {
        percentage(self.misses, self.tests)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn run(params: &Params) -> Result<Summary> {
    // Init sampler.
    let mut uniform = if let Some(seed) = params.seed {
        info!("Seeding sampler with {seed}");
        UniformSampler::new_with_seed(seed)
    } else {
        info!("Seeding sampler from entropy");
        UniformSampler::new()
    };

    // Generate.
    info!(
        "Testing {} rays against {} triangles",
        params.ray_count, params.triangle_count
    );
    let fixtures = Fixtures::generate(params, &mut uniform);
    let tests = fixtures.hits.len() + fixtures.misses.len();

    // Balance.
    let misses = fixtures.balanced_misses();
    if misses.len() < fixtures.hits.len() {
        warn!(
            "Only {} misses for {} hits, writing every miss",
            misses.len(),
            fixtures.hits.len()
        );
    }

    // Write.
    let hit_path = params.hit_path();
    write_to_file(&hit_path, &fixtures.hits)?;
    info!("Wrote {} hits to {}", fixtures.hits.len(), hit_path.display());
    let miss_path = params.miss_path();
    write_to_file(&miss_path, misses)?;
    info!("Wrote {} misses to {}", misses.len(), miss_path.display());

    // Verify.
    for (path, expect_hit) in [(&hit_path, true), (&miss_path, false)] {
        let records = read_from_file(path)?;
        verify(&records, expect_hit).with_context(|| format!("Verifying {}", path.display()))?;
        info!("Verified {} records in {}", records.len(), path.display());
    }

    Ok(Summary {
        tests,
        hits: fixtures.hits.len(),
        misses: fixtures.misses.len(),
        hits_written: fixtures.hits.len(),
        misses_written: misses.len(),
    })
}

//
// Tests
//
