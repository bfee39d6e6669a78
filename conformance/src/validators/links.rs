//! IC-18: slice membership implies data set membership.

use qb_store::Graph;

use crate::constraint::ConstraintId;
use crate::report::ViolationReport;
use crate::terms::terms;

/// IC-18: if data set `D` has slice `S` and `S` has observation `O`, then
/// `O qb:dataSet D`.
///
/// Keyed by observation; the detail lists every data set it should link to
/// but does not.
#[must_use]
pub fn consistent_data_set_links(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic18);
    for link in graph.triples_with(None, Some(&t.slice), None) {
        let (data_set, slice) = (link.subject, link.object);
        for obs in graph.objects(&slice, &t.observation) {
            if !graph.contains(&obs, &t.data_set, &data_set) {
                report.flag_nodes(obs, [data_set.clone()]);
            }
        }
    }
    report
}
