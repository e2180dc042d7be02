mod common;

use common::synthetic_image::{half_split_image, textured_image, uniform_image};
use quickshift_segmentation::density::{estimate_density, perturb_density};
use quickshift_segmentation::forest::{cut_links, flatten_forest};
use quickshift_segmentation::image::{IndexMap, MultiChannelImage};
use quickshift_segmentation::linker::link_neighbors;
use quickshift_segmentation::{segment, QuickshiftParams};

fn params(sigma: f64, tau: f64, seed: u64) -> QuickshiftParams {
    QuickshiftParams {
        sigma,
        tau,
        seed: Some(seed),
        ..Default::default()
    }
}

/// Follow parent pointers to the root by plain traversal. Used as the slow
/// reference against the pointer-doubling flattener.
fn root_of(parents: &IndexMap, start: usize) -> usize {
    let mut i = start;
    loop {
        let p = parents.data[i];
        if p == i {
            return i;
        }
        i = p;
    }
}

#[test]
fn uniform_image_with_huge_cutoff_yields_one_segment() {
    // density is uniform up to the tie-breaking noise; an effectively
    // unbounded cutoff keeps every link, so all 16 pixels join one tree
    let image = uniform_image(4, 4, 0.0);
    let result = segment(&image, &params(1.0, 1000.0, 7)).unwrap();
    assert_eq!(result.num_segments, 1, "labels: {:?}", result.labels.data);
    let root = result.labels.data[0];
    assert!(result.labels.data.iter().all(|&l| l == root));
}

#[test]
fn contrast_split_yields_one_segment_per_half() {
    // no seed: the unperturbed field ties within each flat half and the
    // deterministic index-order fallback picks exactly one root per half
    let image = half_split_image(8, 8, 0.0, 255.0);
    let request = QuickshiftParams {
        sigma: 2.0,
        tau: 50.0,
        ..Default::default()
    };
    let result = segment(&image, &request).unwrap();
    assert_eq!(result.num_segments, 2, "labels: {:?}", result.labels.data);

    // no link crosses the split: the color term alone (255^2) dwarfs tau
    let left_label = result.labels.get(0, 0);
    let right_label = result.labels.get(7, 7);
    assert_ne!(left_label, right_label);
    for y in 0..8 {
        for x in 0..8 {
            let expect = if x < 4 { left_label } else { right_label };
            assert_eq!(result.labels.get(x, y), expect, "pixel ({x},{y})");
        }
    }
}

#[test]
fn zero_cutoff_forces_identity_labels() {
    // spatial offsets make every link distance strictly positive, so tau = 0
    // severs everything
    let image = textured_image(6, 5);
    let result = segment(&image, &params(1.5, 0.0, 99)).unwrap();
    assert_eq!(result.num_segments, 30);
    assert_eq!(result.labels, IndexMap::identity(6, 5));
}

#[test]
fn single_pixel_image_labels_itself() {
    let image = MultiChannelImage::new(1, 1, 3);
    for (sigma, tau) in [(1.0, 0.0), (4.0, 1e6)] {
        let result = segment(&image, &params(sigma, tau, 0)).unwrap();
        assert_eq!(result.labels.data, vec![0]);
        assert_eq!(result.num_segments, 1);
    }
}

#[test]
fn raising_the_cutoff_never_splits_segments() {
    let image = textured_image(10, 10);
    let mut previous = usize::MAX;
    for tau in [0.0, 1.0, 4.0, 16.0, 64.0, 1e6] {
        let result = segment(&image, &params(1.0, tau, 21)).unwrap();
        assert!(
            result.num_segments <= previous,
            "tau={tau}: {} segments after {previous}",
            result.num_segments
        );
        previous = result.num_segments;
    }
}

#[test]
fn labels_agree_with_post_cut_forest_connectivity() {
    let image = textured_image(9, 7);
    let sigma = 2.0;
    let tau = 40.0;

    let mut density = estimate_density(&image, sigma);
    perturb_density(&mut density, Some(17));
    let mut linkage = link_neighbors(&image, &density, sigma);
    cut_links(&mut linkage.parents, &linkage.distances, tau);
    let outcome = flatten_forest(&linkage.parents);

    // two pixels share a label exactly when they reach the same root
    for i in 0..outcome.labels.data.len() {
        assert_eq!(
            outcome.labels.data[i],
            root_of(&linkage.parents, i),
            "pixel {i} flattened to the wrong root"
        );
    }
}

#[test]
fn flattening_flat_labels_is_a_fixed_point() {
    let image = textured_image(8, 6);
    let result = segment(&image, &params(1.5, 20.0, 5)).unwrap();
    let again = flatten_forest(&result.labels);
    assert_eq!(again.labels, result.labels);
    assert_eq!(again.iterations, 1);
}

#[test]
fn tree_is_the_pre_cut_hierarchy_and_runs_reproduce() {
    let image = textured_image(7, 7);
    let sigma = 1.5;
    let tau = 6.0;
    let seed = 23;

    let mut request = params(sigma, tau, seed);
    request.return_tree = true;
    let result = segment(&image, &request).unwrap();
    let tree = result.tree.expect("tree requested");

    // drive the stages by hand with the same seed
    let mut density = estimate_density(&image, sigma);
    perturb_density(&mut density, Some(seed));
    let linkage = link_neighbors(&image, &density, sigma);
    assert_eq!(tree, linkage.parents, "tree must be the un-cut parent field");

    // tree parents point uphill or to self, never downhill
    for (i, &p) in tree.data.iter().enumerate() {
        assert!(
            p == i || density.data[p] > density.data[i] || (density.data[p] == density.data[i] && p < i),
            "pixel {i} has a downhill tree parent {p}"
        );
    }

    let rerun = segment(&image, &request).unwrap();
    assert_eq!(rerun.labels, result.labels);
    assert_eq!(rerun.num_segments, result.num_segments);
}

#[test]
fn small_images_segment_without_touching_out_of_bounds() {
    // any out-of-window access would panic on the owned buffers
    for w in 1..=4 {
        for h in 1..=4 {
            for sigma in [1.0, 2.5] {
                let image = textured_image(w, h);
                let result = segment(&image, &params(sigma, 10.0, 2)).unwrap();
                assert_eq!(result.labels.data.len(), w * h);
                assert!(result.labels.data.iter().all(|&l| l < w * h));
            }
        }
    }
}
