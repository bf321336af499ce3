//! Record → graph mutations. Pure: one immutable record in, an immutable
//! operation list out, no shared builder state.

use tacit_core::models::{
    DecisionRecord, EntityType, GraphEntity, GraphRelation, OperationPayload,
    QueuedGraphOperation, RecordKind, RelationType,
};

/// Build the queued operations for one record: always one `create_entities`
/// operation, plus one `create_relations` operation when any relation is
/// generated.
pub fn build_operations(record: &DecisionRecord) -> Vec<QueuedGraphOperation> {
    let entities = build_entities(record);
    let relations = build_relations(record);

    let mut ops = vec![QueuedGraphOperation::now(OperationPayload::CreateEntities(
        entities,
    ))];
    if !relations.is_empty() {
        ops.push(QueuedGraphOperation::now(OperationPayload::CreateRelations(
            relations,
        )));
    }
    ops
}

/// Main entity named by the record id, then one auxiliary entity per
/// extracted name. Cross-record dedup of auxiliaries belongs to the
/// external memory service.
fn build_entities(record: &DecisionRecord) -> Vec<GraphEntity> {
    let mut out = vec![GraphEntity {
        name: record.id.clone(),
        entity_type: main_entity_type(record.kind),
        observations: crate::observations::main_entity_observations(record),
    }];

    for name in &record.entities {
        out.push(GraphEntity {
            name: name.clone(),
            entity_type: tacit_vocab::entity_type_of(name),
            observations: Vec::new(),
        });
    }
    out
}

fn build_relations(record: &DecisionRecord) -> Vec<GraphRelation> {
    let mut out = Vec::new();

    // Main relation per mentioned entity, selected by record kind.
    let main_relation = match record.kind {
        RecordKind::Decision => RelationType::Chose,
        RecordKind::Preference => RelationType::Prefers,
        _ => RelationType::Mentions,
    };
    for entity in &record.entities {
        out.push(GraphRelation::new(
            record.id.clone(),
            entity.clone(),
            main_relation.clone(),
        ));
    }

    // CHOSE_OVER anchors on the decision's subject text, not the record id,
    // so alternatives stay queryable by phrase without knowing the id.
    for alternative in &record.content.alternatives {
        out.push(GraphRelation::new(
            record.content.what.clone(),
            alternative.clone(),
            RelationType::ChoseOver,
        ));
    }

    // Constraints and tradeoffs are free-text relation targets, not nodes.
    for constraint in &record.content.constraints {
        out.push(GraphRelation::new(
            record.id.clone(),
            constraint.clone(),
            RelationType::Constraint,
        ));
    }
    for tradeoff in &record.content.tradeoffs {
        out.push(GraphRelation::new(
            record.id.clone(),
            tradeoff.clone(),
            RelationType::Tradeoff,
        ));
    }

    // Co-occurrence cross-links: every entity pair, n·(n−1)/2 edges, so the
    // graph can answer "what appears alongside X" without per-pair authoring.
    for (i, a) in record.entities.iter().enumerate() {
        for b in &record.entities[i + 1..] {
            out.push(GraphRelation::new(
                a.clone(),
                b.clone(),
                RelationType::RelatesTo,
            ));
        }
    }

    // Caller-supplied explicit relations, verbatim.
    out.extend(record.relations.iter().cloned());
    out
}

/// Fixed record-kind → entity-type map for the main entity.
fn main_entity_type(kind: RecordKind) -> EntityType {
    match kind {
        RecordKind::Decision => EntityType::Decision,
        RecordKind::Preference => EntityType::Preference,
        RecordKind::ProblemSolution => EntityType::Solution,
        RecordKind::Pattern => EntityType::Pattern,
        RecordKind::Workflow => EntityType::Workflow,
    }
}
