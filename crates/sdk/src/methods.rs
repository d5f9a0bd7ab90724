//! Remote method table and facade methods
//!
//! Each entry produces a facade method, its deprecated `*_async` twin, and a
//! [`RpcMethod`] descriptor in [`METHODS`].

use crate::client::ProbModelSeedClient;
use crate::invoker::RpcCall;
use crate::types::{ReturnArity, RpcMethod};
use serde::Serialize;
use serde_json::Value;

macro_rules! rpc_methods {
    ($(
        $(#[$doc:meta])*
        $rust:ident, $deprecated:ident => $wire:literal, $arity:ident;
    )*) => {
        /// Every remote method exposed by the service
        pub const METHODS: &[RpcMethod] = &[
            $(RpcMethod {
                rust_name: stringify!($rust),
                name: $wire,
                arity: ReturnArity::$arity,
            },)*
        ];

        impl ProbModelSeedClient {
            $(
                $(#[$doc])*
                #[doc = concat!("\n\nCalls `ProbModelSEED.", $wire, "`.")]
                pub fn $rust(&self, input: impl Serialize) -> RpcCall<Value> {
                    const METHOD: RpcMethod = RpcMethod {
                        rust_name: stringify!($rust),
                        name: $wire,
                        arity: ReturnArity::$arity,
                    };
                    self.call_method(&METHOD, input)
                }

                #[doc = concat!("Deprecated alias of [`Self::", stringify!($rust), "`].")]
                #[deprecated(note = "'*_async' method names will be removed; use the method without the suffix")]
                pub fn $deprecated(&self, input: impl Serialize) -> RpcCall<Value> {
                    self.deprecation_warning();
                    self.$rust(input)
                }
            )*
        }
    };
}

rpc_methods! {
    /// List gapfilling solutions of a model.
    list_gapfill_solutions, list_gapfill_solutions_async => "list_gapfill_solutions", One;
    /// Integrate, unintegrate or delete gapfilling solutions.
    manage_gapfill_solutions, manage_gapfill_solutions_async => "manage_gapfill_solutions", One;
    /// List FBA studies run on a model.
    list_fba_studies, list_fba_studies_async => "list_fba_studies", One;
    delete_fba_studies, delete_fba_studies_async => "delete_fba_studies", One;
    /// Export a model (SBML, Excel, ...).
    export_model, export_model_async => "export_model", One;
    export_media, export_media_async => "export_media", One;
    /// Fetch a model's reactions, compounds, genes and biomass.
    get_model, get_model_async => "get_model", One;
    delete_model, delete_model_async => "delete_model", One;
    /// List the models under a workspace path.
    list_models, list_models_async => "list_models", One;
    copy_model, copy_model_async => "copy_model", One;
    copy_genome, copy_genome_async => "copy_genome", One;
    list_model_edits, list_model_edits_async => "list_model_edits", One;
    edit_model, edit_model_async => "edit_model", One;
    get_feature, get_feature_async => "get_feature", One;
    /// Save a feature's function. Returns the raw `result` list.
    save_feature_function, save_feature_function_async => "save_feature_function", Zero;
    compare_regions, compare_regions_async => "compare_regions", One;
    plant_annotation_overview, plant_annotation_overview_async => "plant_annotation_overview", One;
    create_genome_from_shock, create_genome_from_shock_async => "create_genome_from_shock", One;
    /// Run the full plant annotation and reconstruction pipeline.
    plant_pipeline, plant_pipeline_async => "plant_pipeline", One;
    annotate_plant_genome, annotate_plant_genome_async => "annotate_plant_genome", One;
    create_featurevalues_from_shock, create_featurevalues_from_shock_async => "create_featurevalues_from_shock", One;
    /// Reconstruct a metabolic model from an annotated genome.
    model_reconstruction, model_reconstruction_async => "ModelReconstruction", One;
    /// Run flux balance analysis on a model.
    flux_balance_analysis, flux_balance_analysis_async => "FluxBalanceAnalysis", One;
    /// Gapfill a model against a media condition.
    gapfill_model, gapfill_model_async => "GapfillModel", One;
    merge_models, merge_models_async => "MergeModels", One;
    import_kbase_model, import_kbase_model_async => "ImportKBaseModel", One;
    /// Poll the status of submitted jobs.
    check_jobs, check_jobs_async => "CheckJobs", One;
    manage_jobs, manage_jobs_async => "ManageJobs", One;
    create_jobs, create_jobs_async => "CreateJobs", One;
}

/// Look up a method by its wire name
pub fn find_method(name: &str) -> Option<&'static RpcMethod> {
    METHODS.iter().find(|m| m.name == name)
}
