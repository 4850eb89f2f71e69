use crate::prelude::*;

/// Expands a forest with several expanders at once, each on its own contiguous chunk.
///
/// Every expander brings its own rules and engine, so no two lines ever share an engine
/// concurrently. The output keeps the input order. If any worker fails, the whole round
/// fails with the first error in chunk order.
pub fn expand_parallel<R, E>(workers: &mut [Expander<R, E>], forest: &Forest, factor: usize) -> Result<Expansion>
where
    R: Rules + Send,
    E: Engine + Send,
{
    if factor == 0
    {
        return Err(Error::new(Kind::InvalidOption, "The expansion factor must be at least 1.".into()));
    }

    match workers.len()
    {
        | 0 => return Err(Error::new(Kind::InvalidOption, "At least one worker is required.".into())),
        | 1 => return workers[0].expand_detailed(forest, factor),
        | _ =>
        {}
    }

    let chunk_size = forest.len().div_ceil(workers.len()).max(1);
    let chunks = forest.lines().chunks(chunk_size).map(|chunk| Forest::new(chunk.to_vec())).collect::<Vec<_>>();

    log::info!("expanding {} lines by {} across {} workers", forest.len(), factor, chunks.len());

    let joined = std::thread::scope(|scope| {
        let handles = workers
            .iter_mut()
            .zip(chunks.iter())
            .map(|(worker, chunk)| scope.spawn(move || worker.expand_detailed(chunk, factor)))
            .collect::<Vec<_>>();

        handles.into_iter().map(|handle| handle.join()).collect::<Vec<_>>()
    });

    let mut results = Vec::with_capacity(joined.len());
    for (worker, outcome) in workers.iter_mut().zip(joined)
    {
        match outcome
        {
            | Ok(result) => results.push(result),
            | Err(_) =>
            {
                worker.mark_desynced();
                results.push(Err(Error::new(Kind::InternalError, "An expansion worker panicked.".into())));
            }
        }
    }

    let mut expansion = Expansion::default();
    let mut offset = 0;
    for (result, chunk) in results.into_iter().zip(chunks.iter())
    {
        let part = result?;
        expansion.forest.extend(part.forest);
        expansion.dropped.extend(part.dropped.into_iter().map(|dropped| Dropped {
            index: dropped.index + offset,
            ..dropped
        }));
        offset += chunk.len();
    }

    Ok(expansion)
}
