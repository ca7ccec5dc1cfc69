use crate::core::chemcomp::provider::ChemCompProvider;
use crate::core::models::structure::Structure;
use crate::core::records::{LinkRecord, SsBondRecord, StructConnRecord};
use crate::engine::cache::ChemCompCache;
use crate::engine::config::{BondMakerConfig, ConfigError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::{backbone, compaction, intra_residue, records};
use std::fmt;
use tracing::{info, instrument};

/// Explicit bond records of one structure, from exactly one file format.
///
/// PDB files describe cross-links with SSBOND and LINK records; mmCIF files
/// describe all of them in `_struct_conn`. The `_struct_conn` import replaces
/// the disulfide list, so the two sources are never combined in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitBonds {
    Pdb {
        ssbonds: Vec<SsBondRecord>,
        links: Vec<LinkRecord>,
    },
    Mmcif {
        struct_conn: Vec<StructConnRecord>,
    },
}

/// Number of bonds created by each pass.
///
/// Bonds that already existed when a pass ran are not counted again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondingSummary {
    pub peptide: usize,
    pub nucleotide: usize,
    pub intra_residue: usize,
    pub disulfide: usize,
    pub link: usize,
    pub struct_conn: usize,
}

impl BondingSummary {
    pub fn total(&self) -> usize {
        self.peptide
            + self.nucleotide
            + self.intra_residue
            + self.disulfide
            + self.link
            + self.struct_conn
    }
}

impl std::ops::AddAssign for BondingSummary {
    fn add_assign(&mut self, other: Self) {
        self.peptide += other.peptide;
        self.nucleotide += other.nucleotide;
        self.intra_residue += other.intra_residue;
        self.disulfide += other.disulfide;
        self.link += other.link;
        self.struct_conn += other.struct_conn;
    }
}

impl fmt::Display for BondingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bonds (peptide {}, nucleotide {}, intra-residue {}, disulfide {}, link {}, struct_conn {})",
            self.total(),
            self.peptide,
            self.nucleotide,
            self.intra_residue,
            self.disulfide,
            self.link,
            self.struct_conn
        )
    }
}

/// Infers the covalent bonds of a structure.
///
/// The bond maker borrows the structure mutably for its whole lifetime and
/// keeps a cache of dictionary lookups, so one instance should serve one
/// structure. Passes only ever add bonds; running any of them again is
/// harmless.
///
/// # Examples
///
/// ```
/// use bondmaker::core::chemcomp::library::ChemCompLibrary;
/// use bondmaker::core::models::builder::StructureBuilder;
/// use bondmaker::engine::config::BondMakerConfig;
/// use bondmaker::workflows::bonding::BondMaker;
///
/// let mut structure = StructureBuilder::new().build();
/// let library = ChemCompLibrary::new();
/// let summary = BondMaker::new(&mut structure, &library, BondMakerConfig::default())?.make_bonds();
/// assert_eq!(summary.total(), 0);
/// # Ok::<(), bondmaker::engine::config::ConfigError>(())
/// ```
pub struct BondMaker<'a, P: ChemCompProvider + ?Sized> {
    structure: &'a mut Structure,
    provider: &'a P,
    config: BondMakerConfig,
    cache: ChemCompCache,
    reporter: ProgressReporter<'a>,
}

impl<'a, P: ChemCompProvider + ?Sized> BondMaker<'a, P> {
    /// Creates a bond maker for `structure`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCutoff`] if a bond-length cutoff in
    /// `config` is not a positive, finite length.
    pub fn new(
        structure: &'a mut Structure,
        provider: &'a P,
        config: BondMakerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            structure,
            provider,
            config,
            cache: ChemCompCache::new(),
            reporter: ProgressReporter::new(),
        })
    }

    pub fn with_reporter(mut self, reporter: ProgressReporter<'a>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &BondMakerConfig {
        &self.config
    }

    pub fn structure(&self) -> &Structure {
        &*self.structure
    }

    /// Forms peptide, nucleotide and intra-residue bonds, then compacts the
    /// per-atom bond lists.
    #[instrument(skip_all, name = "bond_making_workflow")]
    pub fn make_bonds(&mut self) -> BondingSummary {
        info!(
            models = self.structure.model_count(),
            atoms = self.structure.atoms_iter().count(),
            "Starting bond inference."
        );

        let max_peptide = self.config.max_peptide_bond_length;
        let peptide = self.phase("Peptide bonds", |s| {
            backbone::form_peptide_bonds(s.structure, max_peptide)
        });

        let max_nucleotide = self.config.max_nucleotide_bond_length;
        let nucleotide = self.phase("Nucleotide bonds", |s| {
            backbone::form_nucleotide_bonds(s.structure, max_nucleotide)
        });

        let intra_residue = self.phase("Intra-residue bonds", |s| {
            intra_residue::form_intra_residue_bonds(s.structure, s.provider, &mut s.cache)
        });

        self.compact();

        let summary = BondingSummary {
            peptide,
            nucleotide,
            intra_residue,
            ..BondingSummary::default()
        };
        info!("Bond inference complete: {}.", summary);
        summary
    }

    /// Bonds the SG atoms of SSBOND records and records the bonds as disulfides.
    pub fn form_disulfide_bonds(&mut self, ssbonds: &[SsBondRecord]) -> usize {
        let ca_only = self.config.ca_only;
        self.phase("Disulfide bonds", |s| {
            records::form_disulfide_bonds(s.structure, ssbonds, ca_only)
        })
    }

    pub fn form_link_record_bonds(&mut self, links: &[LinkRecord]) -> usize {
        let ca_only = self.config.ca_only;
        self.phase("LINK bonds", |s| {
            records::form_link_record_bonds(s.structure, links, ca_only)
        })
    }

    /// Bonds covalent `_struct_conn` entries. The structure's disulfide list
    /// is replaced by the `disulf` bonds of these entries.
    pub fn form_bonds_from_struct_conn(&mut self, struct_conn: &[StructConnRecord]) -> usize {
        let identity = self.config.identity_operator.clone();
        self.phase("Struct_conn bonds", |s| {
            records::form_bonds_from_struct_conn(s.structure, struct_conn, &identity)
        })
    }

    /// Imports explicit bond records, then compacts the bond lists again.
    #[instrument(skip_all, name = "record_import_workflow")]
    pub fn import_records(&mut self, explicit: &ExplicitBonds) -> BondingSummary {
        let summary = match explicit {
            ExplicitBonds::Pdb { ssbonds, links } => BondingSummary {
                disulfide: self.form_disulfide_bonds(ssbonds),
                link: self.form_link_record_bonds(links),
                ..BondingSummary::default()
            },
            ExplicitBonds::Mmcif { struct_conn } => BondingSummary {
                struct_conn: self.form_bonds_from_struct_conn(struct_conn),
                ..BondingSummary::default()
            },
        };
        self.compact();
        info!("Record import complete: {}.", summary);
        summary
    }

    /// Runs [`make_bonds`](Self::make_bonds) followed by
    /// [`import_records`](Self::import_records) when records are given.
    pub fn run(&mut self, explicit: Option<&ExplicitBonds>) -> BondingSummary {
        let mut summary = self.make_bonds();
        if let Some(explicit) = explicit {
            summary += self.import_records(explicit);
        }
        summary
    }

    fn compact(&mut self) {
        self.reporter.report(Progress::PhaseStart { name: "Compaction" });
        compaction::trim_bond_lists(self.structure);
        self.reporter.report(Progress::PhaseFinish {
            name: "Compaction",
            bonds: 0,
        });
    }

    fn phase(&mut self, name: &'static str, pass: impl FnOnce(&mut Self) -> usize) -> usize {
        self.reporter.report(Progress::PhaseStart { name });
        let bonds = pass(self);
        self.reporter.report(Progress::PhaseFinish { name, bonds });
        bonds
    }
}
